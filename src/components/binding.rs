use crate::api::MediaServerClient;
use crate::controller::{GridState, Notice, NoticeBoard, Remote, StatusPanel, ViewBinding};
use dioxus::prelude::*;
use std::rc::Rc;

/// The page's controllers, shared by every component through context.
pub type PageRemote = Rc<Remote<MediaServerClient, SignalBinding>>;

/// Renders controller output into signals so components re-render on change.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalBinding {
    pub grid: Signal<GridState>,
    pub panel: Signal<StatusPanel>,
    pub notices: Signal<NoticeBoard>,
}

impl ViewBinding for SignalBinding {
    fn update_grid(&self, f: impl FnOnce(&mut GridState)) {
        let mut grid = self.grid;
        f(&mut *grid.write());
    }

    fn update_status(&self, f: impl FnOnce(&mut StatusPanel)) {
        let mut panel = self.panel;
        f(&mut *panel.write());
    }

    fn notify(&self, notice: Notice) {
        let mut notices = self.notices;
        notices.write().post(notice);
    }
}
