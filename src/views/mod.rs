//! 视图层模块
//!
//! 从 `AppState` 构建纯数据的视图模型，不依赖任何终端库：
//! - toolbar: 语言/主题/格式化/面板开关
//! - tabs: 标签行布局与命中测试
//! - explorer: 打开文件列表
//! - bottom_panel: 终端/问题面板
//! - right_panel: 当前文件详情
//! - status: 状态栏

pub mod bottom_panel;
pub mod explorer;
pub mod right_panel;
pub mod status;
pub mod tabs;
pub mod text;
pub mod toolbar;

pub use bottom_panel::{bottom_panel, BottomPanelBody, BottomPanelModel, BottomTabItem, ProblemRow};
pub use explorer::{explorer, ExplorerModel, ExplorerRow};
pub use right_panel::{right_panel, RightPanelModel};
pub use status::{status_bar, StatusBarModel};
pub use tabs::{compute_tab_row_layout, TabRowLayout, TabSlot};
pub use text::{ellipsize, pad_to_width, truncate_to_width};
pub use toolbar::{toolbar, PanelToggle, ToolbarModel};
