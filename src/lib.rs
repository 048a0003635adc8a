//! zbench - 终端代码工作台库
//!
//! 模块结构：
//! - kernel: 无 IO 的工作台核心（State / Action / Effect / Store）以及服务端口与适配器
//! - app: 应用层（Workbench，执行 Effect 并桥接编辑器引擎事件）
//! - views: 视图模型（工具栏、标签行、资源管理器、底部面板、详情面板、状态栏）
//! - tui: 终端前端（crossterm + ratatui，feature `tui`）

pub mod app;
pub mod kernel;
#[cfg(feature = "tui")]
pub mod tui;
pub mod views;
