use crate::{
    core::{
        cmd::Cmd,
        msg::pages::CourseListMsg,
        state::{input::SearchState, remote::Remote, selection},
        update::UpdateContext,
    },
    domain::{catalog::Catalog, course::Course, filter::CourseFilter},
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseListState {
    pub catalog: Remote<Catalog>,
    pub search: SearchState,
    pub selected: usize,
}

impl CourseListState {
    pub fn filter(&self) -> CourseFilter {
        CourseFilter {
            query: self.search.query().to_owned(),
        }
    }

    /// Courses matching the search, in backend order
    pub fn visible(&self) -> Vec<&Course> {
        self.catalog
            .loaded()
            .map(|catalog| self.filter().apply(&catalog.courses))
            .unwrap_or_default()
    }

    pub fn selected_course(&self) -> Option<&Course> {
        self.visible().get(self.selected).copied()
    }

    fn clamp_selection(&mut self) {
        self.selected = selection::clamp(self.selected, self.visible().len());
    }

    pub fn remove_course(&mut self, course_id: &str) {
        if let Some(catalog) = self.catalog.loaded_mut() {
            catalog.remove_course(course_id);
        }
        self.clamp_selection();
    }

    pub fn update(&mut self, msg: CourseListMsg, ctx: &UpdateContext<'_>) -> Vec<Cmd> {
        match msg {
            CourseListMsg::SelectNext => {
                self.selected = selection::next(self.selected, self.visible().len());
            }
            CourseListMsg::SelectPrev => {
                self.selected = selection::prev(self.selected);
            }
            CourseListMsg::StartSearch => {
                self.search.editing = true;
            }
            CourseListMsg::SearchKey(key) => {
                self.search.input = ctx.text_area.apply_keys(&self.search.input, &[key]);
                self.selected = 0;
            }
            CourseListMsg::EndSearch => {
                self.search.editing = false;
            }
            CourseListMsg::ClearSearch => {
                self.search = SearchState::default();
                self.clamp_selection();
            }
            CourseListMsg::OpenSelected | CourseListMsg::RequestDelete => {}
        }
        vec![]
    }
}
