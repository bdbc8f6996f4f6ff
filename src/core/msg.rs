pub mod dialog;
pub mod form;
pub mod nav;
pub mod pages;
pub mod system;

use crate::core::api::ApiReply;
use dialog::DialogMsg;
use form::{CourseFormMsg, InstanceFormMsg};
use nav::NavMsg;
use pages::{CourseDetailMsg, CourseListMsg, DashboardMsg, InstanceDetailMsg, InstanceListMsg};
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    System(SystemMsg),
    Nav(NavMsg),

    // Pages
    Dashboard(DashboardMsg),
    CourseList(CourseListMsg),
    CourseDetail(CourseDetailMsg),
    InstanceList(InstanceListMsg),
    InstanceDetail(InstanceDetailMsg),

    // Forms
    CourseForm(CourseFormMsg),
    InstanceForm(InstanceFormMsg),

    Dialog(DialogMsg),

    /// Backend reply, matched to its request by the tracker
    Api(ApiReply),
}

impl Msg {
    pub fn is_frequent(&self) -> bool {
        false
    }
}
