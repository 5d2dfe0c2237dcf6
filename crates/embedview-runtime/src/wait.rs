use std::time::Duration;

use tokio::time::sleep;

pub(crate) const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Poll `probe` at a fixed interval until it yields a value or the ceiling
/// is reached. Cooperative and non-blocking; never hangs past the ceiling.
pub(crate) async fn wait_for<T>(
    mut probe: impl FnMut() -> Option<T>,
    ceiling: Duration,
) -> Option<T> {
    let mut waited = Duration::ZERO;
    loop {
        if let Some(value) = probe() {
            return Some(value);
        }
        if waited >= ceiling {
            return None;
        }
        sleep(POLL_INTERVAL).await;
        waited += POLL_INTERVAL;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn immediate_success_returns_without_sleeping() {
        assert_eq!(wait_for(|| Some(7), Duration::ZERO).await, Some(7));
    }

    #[tokio::test]
    async fn zero_ceiling_probes_exactly_once() {
        let mut calls = 0;
        let result = wait_for(
            || {
                calls += 1;
                None::<()>
            },
            Duration::ZERO,
        )
        .await;
        assert_eq!(result, None);
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn value_appearing_during_the_poll_is_picked_up() {
        let mut calls = 0;
        let result = wait_for(
            || {
                calls += 1;
                (calls >= 3).then_some(calls)
            },
            Duration::from_secs(1),
        )
        .await;
        assert_eq!(result, Some(3));
    }
}
