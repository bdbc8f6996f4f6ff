use crate::domain::term::Term;

/// A delete waiting for the user's confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingDelete {
    Course {
        course_id: String,
        title: String,
    },
    Instance {
        term: Term,
        course_id: String,
        title: String,
    },
}

impl PendingDelete {
    pub fn title(&self) -> &str {
        match self {
            PendingDelete::Course { title, .. } | PendingDelete::Instance { title, .. } => title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub target: PendingDelete,
}

impl ConfirmDialog {
    pub fn new(target: PendingDelete) -> Self {
        Self { target }
    }

    pub fn heading(&self) -> &'static str {
        match self.target {
            PendingDelete::Course { .. } => "Delete Course",
            PendingDelete::Instance { .. } => "Delete Course Instance",
        }
    }

    pub fn message(&self) -> String {
        format!(
            "Are you sure you want to delete \"{}\"? This action cannot be undone.",
            self.target.title()
        )
    }
}
