// Adapters layer: CommandRunner 的實作 (真正執行 netsh，或只印出指令)

pub mod dry_run;
pub mod netsh;
