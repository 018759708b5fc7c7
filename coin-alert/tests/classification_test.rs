use coin_alert::filter::{contains_primary_keyword, matched_keywords, PRIMARY_KEYWORDS};
use coin_alert::llm_adapter::{build_prompt, parse_analysis, strip_code_fences};
use coin_alert::message::{format_alert, icon_for, should_notify, BTC_ICON, DOGE_ICON};
use coin_alert::types::{Analysis, AnalysisError, Coin};

fn analysis(coin: Coin, importance: i64) -> Analysis {
    Analysis {
        coin,
        importance,
        reason: "ETF 승인".to_string(),
        summary_korean: "비트코인 현물 ETF가 승인되었습니다.".to_string(),
    }
}

#[test]
fn test_every_keyword_matches_in_any_case() {
    for keyword in PRIMARY_KEYWORDS {
        let upper = format!("Headline about {} today", keyword.to_uppercase());
        assert!(contains_primary_keyword(&upper), "{} should match", keyword);
        assert!(contains_primary_keyword(keyword));
    }
}

#[test]
fn test_keyword_matching_is_substring_based() {
    // "sec" hides inside "second", which still counts
    assert!(contains_primary_keyword("The second quarter results"));
    assert!(contains_primary_keyword("Market CRASH\nfears grow"));
    assert!(contains_primary_keyword("elon musk tweets again"));
    assert!(!contains_primary_keyword("Elon and Musk"));
}

#[test]
fn test_text_without_keywords_is_rejected() {
    assert!(!contains_primary_keyword("Gardening tips for spring\nPlant tomatoes early."));
    assert!(!contains_primary_keyword(""));
    assert!(matched_keywords("Weather report").is_empty());
}

#[test]
fn test_matched_keywords_follow_list_order() {
    let matched = matched_keywords("Dogecoin surges after Bitcoin halving");
    assert_eq!(matched, vec!["bitcoin", "dogecoin", "doge", "halving", "surge"]);
}

#[test]
fn test_strip_code_fences() {
    let raw = "```json\n{\"coin\": \"BTC\"}\n```";
    assert_eq!(strip_code_fences(raw).trim(), "{\"coin\": \"BTC\"}");
    assert_eq!(strip_code_fences("  {}  "), "{}");
}

#[test]
fn test_parse_fenced_analysis() {
    let raw = "```json\n{\"coin\": \"BTC\", \"importance\": 5, \"reason\": \"r\", \"summary_korean\": \"요약\"}\n```\n";
    let parsed = parse_analysis(raw).unwrap().into_analysis().unwrap();
    assert_eq!(parsed.coin, Coin::Btc);
    assert_eq!(parsed.importance, 5);
    assert_eq!(parsed.summary_korean, "요약");
}

#[test]
fn test_invalid_json_is_a_skippable_parse_error() {
    let err = parse_analysis("Sorry, I cannot help with that.").unwrap_err();
    assert!(matches!(err, AnalysisError::Parse(_)));
    assert!(err.is_skippable());
}

#[test]
fn test_missing_field_is_a_fatal_schema_error() {
    let reply = parse_analysis(r#"{"importance": 5, "reason": "r", "summary_korean": "s"}"#).unwrap();
    let err = reply.coin().unwrap_err();
    assert!(matches!(err, AnalysisError::Schema(_)));
    assert!(!err.is_skippable());

    let reply = parse_analysis(r#"{"coin": "BTC", "importance": "high", "reason": "r", "summary_korean": "s"}"#).unwrap();
    assert_eq!(reply.coin().unwrap(), Coin::Btc);
    assert!(matches!(reply.importance(), Err(AnalysisError::Schema(_))));

    let reply = parse_analysis(r#"{"coin": "BTC", "importance": 5, "reason": "r"}"#).unwrap();
    assert!(matches!(reply.into_analysis(), Err(AnalysisError::Schema(_))));
}

#[test]
fn test_none_verdict_needs_no_other_fields() {
    let reply = parse_analysis(r#"{"coin": "NONE", "importance": 1, "reason": "unrelated"}"#).unwrap();
    assert_eq!(reply.coin().unwrap(), Coin::None);
    assert_eq!(reply.importance().unwrap(), 1);
    // Only building the full alert needs the summary
    assert!(matches!(reply.into_analysis(), Err(AnalysisError::Schema(_))));
}

#[test]
fn test_blank_json_is_skippable() {
    for raw in ["null", "{}", "[]", "```json\nnull\n```"] {
        let err = parse_analysis(raw).unwrap_err();
        assert!(matches!(err, AnalysisError::NoAnalysis), "{} should hold no analysis", raw);
        assert!(err.is_skippable());
    }
}

#[test]
fn test_non_object_reply_is_a_schema_error() {
    let reply = parse_analysis(r#"["BTC", 5]"#).unwrap();
    assert!(matches!(reply.coin(), Err(AnalysisError::Schema(_))));
}

#[test]
fn test_empty_response_is_skippable() {
    assert!(AnalysisError::EmptyResponse.is_skippable());
}

#[test]
fn test_prompt_embeds_news_text() {
    let prompt = build_prompt("Bitcoin ETF approved\nDetails here");
    assert!(prompt.contains("Return strictly in JSON format"));
    assert!(prompt.contains("\"summary_korean\""));
    assert!(prompt.trim_end().ends_with("News:\nBitcoin ETF approved\nDetails here"));
}

#[test]
fn test_icon_selection() {
    assert_eq!(icon_for(&Coin::Btc), BTC_ICON);
    assert_eq!(icon_for(&Coin::Doge), DOGE_ICON);
    assert_eq!(icon_for(&Coin::Both), DOGE_ICON);
    assert_eq!(icon_for(&Coin::Other("ETH".to_string())), DOGE_ICON);
}

#[test]
fn test_notification_gate() {
    assert!(should_notify(&Coin::Btc, 4));
    assert!(should_notify(&Coin::Both, 5));
    assert!(should_notify(&Coin::Other("ETH".to_string()), 4));
    for importance in 1..=3 {
        assert!(!should_notify(&Coin::Btc, importance));
    }
    assert!(!should_notify(&Coin::None, 5));
}

#[test]
fn test_alert_message_layout() {
    let message = format_alert(&analysis(Coin::Btc, 5), "https://news.example.com/btc-etf");
    let expected = "\n\
                    🚨 CRYPTO ALERT ₿\n\
                    \n\
                    코인: BTC\n\
                    중요도: 5/5\n\
                    \n\
                    비트코인 현물 ETF가 승인되었습니다.\n\
                    \n\
                    이유: ETF 승인\n\
                    \n\
                    🔗 https://news.example.com/btc-etf\n";
    assert_eq!(message, expected);

    let doge = format_alert(&analysis(Coin::Both, 4), "https://x");
    assert!(doge.starts_with("\n🚨 CRYPTO ALERT 🐶"));
    assert!(doge.contains("코인: BOTH"));
    assert!(doge.contains("4/5"));
}
