use crate::types::{Analysis, Coin, IMPORTANCE_THRESHOLD};

pub const BTC_ICON: &str = "₿";
pub const DOGE_ICON: &str = "🐶";

/// Text sent by the `probe` subcommand to check bot credentials
pub const PROBE_MESSAGE: &str = "🔥 강제 테스트 메시지 - 전송 확인";

/// Only an exact BTC verdict gets the bitcoin icon. DOGE, BOTH and anything
/// unrecognized share the dog.
pub fn icon_for(coin: &Coin) -> &'static str {
    match coin {
        Coin::Btc => BTC_ICON,
        _ => DOGE_ICON,
    }
}

/// Gate applied after a successful classification.
pub fn should_notify(coin: &Coin, importance: i64) -> bool {
    !coin.is_none() && importance >= IMPORTANCE_THRESHOLD
}

pub fn format_alert(analysis: &Analysis, link: &str) -> String {
    format!(
        "\n\
         🚨 CRYPTO ALERT {icon}\n\
         \n\
         코인: {coin}\n\
         중요도: {importance}/5\n\
         \n\
         {summary}\n\
         \n\
         이유: {reason}\n\
         \n\
         🔗 {link}\n",
        icon = icon_for(&analysis.coin),
        coin = analysis.coin,
        importance = analysis.importance,
        summary = analysis.summary_korean,
        reason = analysis.reason,
        link = link,
    )
}
