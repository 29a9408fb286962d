//! 中断处理
//!
//! 运行期间等待中断信号；信号监听本身失败时只记录警告，不影响运行。

use std::future::Future;
use tracing::warn;

/// 运行 `work`，收到中断信号时放弃它并返回 `None`
///
/// `interrupt` 返回 `Err`（例如无法注册信号处理）不算中断，继续等待 `work` 完成。
pub async fn until_interrupted<T>(
    work: impl Future<Output = T>,
    interrupt: impl Future<Output = std::io::Result<()>>,
) -> Option<T> {
    tokio::pin!(work);

    let signal = tokio::select! {
        output = &mut work => return Some(output),
        signal = interrupt => signal,
    };

    match signal {
        Ok(()) => None,
        Err(e) => {
            warn!("⚠️ 无法监听中断信号: {}，继续运行", e);
            Some(work.await)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::pending;

    #[tokio::test]
    async fn test_interrupt_abandons_work() {
        let outcome = until_interrupted(pending::<u32>(), async { Ok(()) }).await;
        assert_eq!(outcome, None);
    }

    #[tokio::test]
    async fn test_listener_failure_keeps_running() {
        let work = async {
            tokio::task::yield_now().await;
            42
        };
        let broken = async { Err(std::io::Error::other("signal handler unavailable")) };

        assert_eq!(until_interrupted(work, broken).await, Some(42));
    }

    #[tokio::test]
    async fn test_work_finishes_first() {
        let outcome = until_interrupted(async { 7 }, pending()).await;
        assert_eq!(outcome, Some(7));
    }
}
