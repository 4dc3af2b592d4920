use std::time::Duration;

use tokio::time::sleep;

/// Wait until the specified unix timestamp in milliseconds
async fn sleep_until(target_ms: i64) {
    loop {
        let now = chrono::Utc::now().timestamp_millis();
        if now >= target_ms {
            break;
        }
        // Short steps so that a suspended host does not stretch the wait
        let remaining = (target_ms - now).min(1000) as u64;
        sleep(Duration::from_millis(remaining)).await;
    }
}

/// Sleep function that works correctly even when PC is in sleep mode
pub async fn sleep_for(duration: Duration) {
    if duration.is_zero() {
        return;
    }
    let millis = i64::try_from(duration.as_millis()).unwrap_or(i64::MAX);
    let target = chrono::Utc::now().timestamp_millis().saturating_add(millis);
    sleep_until(target).await;
}
