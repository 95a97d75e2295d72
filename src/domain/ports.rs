use crate::utils::error::Result;
use async_trait::async_trait;

/// 執行防火牆設定工具 (netsh) 的介面，回傳合併後的 stdout/stderr。
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, args: &[String]) -> Result<String>;
}

#[async_trait]
impl<T: CommandRunner + ?Sized> CommandRunner for Box<T> {
    async fn run(&self, args: &[String]) -> Result<String> {
        (**self).run(args).await
    }
}
