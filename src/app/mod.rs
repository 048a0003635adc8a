//! 应用层：工作台编排（Workbench）

pub mod workbench;

pub use workbench::Workbench;
