use crate::controller::page_controller::PageController;

#[derive(Clone)]
pub struct AppState {
    pub controller: PageController,
}
