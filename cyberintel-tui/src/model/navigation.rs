//! 导航状态定义

use cyberintel_core::ViewId;

/// 导航项
#[derive(Debug, Clone)]
pub struct NavItem {
    pub view: ViewId,
    pub label: &'static str,
    pub icon: &'static str,
}

/// 导航状态
pub struct NavigationState {
    /// 导航项列表
    pub items: Vec<NavItem>,
    /// 当前选中的索引
    pub selected: usize,
}

impl NavigationState {
    /// 创建默认导航状态
    pub fn new() -> Self {
        Self {
            items: vec![
                NavItem {
                    view: ViewId::Dashboard,
                    label: "Dashboard",
                    icon: "⌂",
                },
                NavItem {
                    view: ViewId::UrlScanner,
                    label: "URL Scanner",
                    icon: "●",
                },
                NavItem {
                    view: ViewId::PasswordLab,
                    label: "Password Lab",
                    icon: "*",
                },
                NavItem {
                    view: ViewId::PhishingDetector,
                    label: "Phishing Detector",
                    icon: "!",
                },
                NavItem {
                    view: ViewId::BreachChecker,
                    label: "Breach Checker",
                    icon: "@",
                },
                NavItem {
                    view: ViewId::Assistant,
                    label: "Sentinel AI",
                    icon: ">",
                },
            ],
            selected: 0,
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// 跳到第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 跳到最后一项
    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// 获取当前选中的导航项
    pub fn current_item(&self) -> Option<&NavItem> {
        self.items.get(self.selected)
    }

    /// 获取当前选中的视图 ID
    pub fn current_view(&self) -> Option<ViewId> {
        self.current_item().map(|item| item.view)
    }

    /// 与路由同步选中指示器
    pub fn sync_to(&mut self, view: ViewId) {
        self.selected = view.nav_index();
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
