use chrono::NaiveDate;

use crate::{
    core::{
        cmd::Cmd,
        msg::pages::CourseDetailMsg,
        state::{remote::Remote, selection},
    },
    domain::{
        course::Course,
        course_detail::CourseDetail,
        instance::{CourseInstance, InstanceStatus},
    },
};

/// What the cursor is on in the detail page
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailEntry<'a> {
    Course(&'a Course),
    Instance(&'a CourseInstance),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseDetailState {
    pub course_id: String,
    pub detail: Remote<CourseDetail>,
    /// Index over prerequisites, then dependents, then instances
    pub selected: usize,
}

impl CourseDetailState {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            ..Default::default()
        }
    }

    fn entry_count(&self) -> usize {
        self.detail
            .loaded()
            .map(|d| d.related_count() + d.instances.len())
            .unwrap_or(0)
    }

    pub fn selected_entry(&self) -> Option<DetailEntry<'_>> {
        let detail = self.detail.loaded()?;
        let related = detail.related_count();
        if self.selected < related {
            detail.related().nth(self.selected).map(DetailEntry::Course)
        } else {
            detail
                .instances
                .get(self.selected - related)
                .map(DetailEntry::Instance)
        }
    }

    /// Same rule as the course list: nothing depends on it and it is not running
    pub fn can_delete(&self, today: NaiveDate) -> bool {
        self.detail.loaded().is_some_and(|d| {
            d.dependents.is_empty()
                && !d
                    .instances
                    .iter()
                    .any(|i| i.status(today) == InstanceStatus::Active)
        })
    }

    pub fn update(&mut self, msg: CourseDetailMsg) -> Vec<Cmd> {
        match msg {
            CourseDetailMsg::SelectNext => {
                self.selected = selection::next(self.selected, self.entry_count());
            }
            CourseDetailMsg::SelectPrev => {
                self.selected = selection::prev(self.selected);
            }
            CourseDetailMsg::OpenSelected
            | CourseDetailMsg::RequestDelete
            | CourseDetailMsg::CreateInstance => {}
        }
        vec![]
    }
}
