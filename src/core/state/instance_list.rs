use crate::{
    core::{
        api::Endpoint,
        cmd::Cmd,
        msg::pages::InstanceListMsg,
        state::{input::SearchState, remote::Remote, selection},
        update::UpdateContext,
    },
    domain::{
        filter::{self, InstanceFilter},
        instance::CourseInstance,
        term::Term,
    },
};

const SEMESTERS: [u8; 2] = [1, 2];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstanceListState {
    pub instances: Remote<Vec<CourseInstance>>,
    pub search: SearchState,
    pub year: Option<i32>,
    pub semester: Option<u8>,
    /// Every year seen in any load, so narrowing by term keeps the other choices
    pub known_years: Vec<i32>,
    pub selected: usize,
}

/// Next element of `options` after `current`, wrapping through `None`
fn cycle<T: Copy + PartialEq>(current: Option<T>, options: &[T]) -> Option<T> {
    match current {
        None => options.first().copied(),
        Some(value) => {
            let position = options.iter().position(|o| *o == value)?;
            options.get(position + 1).copied()
        }
    }
}

impl InstanceListState {
    pub fn filter(&self) -> InstanceFilter {
        InstanceFilter {
            query: self.search.query().to_owned(),
            year: self.year,
            semester: self.semester,
        }
    }

    pub fn visible(&self) -> Vec<&CourseInstance> {
        self.instances
            .loaded()
            .map(|instances| self.filter().apply(instances))
            .unwrap_or_default()
    }

    pub fn selected_instance(&self) -> Option<&CourseInstance> {
        self.visible().get(self.selected).copied()
    }

    /// The term endpoint is used once both parts of a term are chosen
    pub fn endpoint(&self) -> Endpoint {
        let term = match (self.year, self.semester) {
            (Some(year), Some(semester)) => Some(Term::new(year, semester)),
            _ => None,
        };
        Endpoint::Instances { term }
    }

    pub fn set_loaded(&mut self, instances: Vec<CourseInstance>) {
        let mut years = filter::years(&instances);
        years.extend(self.known_years.iter().copied());
        years.sort_unstable();
        years.dedup();
        self.known_years = years;
        self.instances = Remote::Loaded(instances);
        self.clamp_selection();
    }

    pub fn remove_instance(&mut self, term: Term, course_id: &str) {
        if let Some(instances) = self.instances.loaded_mut() {
            instances.retain(|i| !i.is_offering(term, course_id));
        }
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        self.selected = selection::clamp(self.selected, self.visible().len());
    }

    /// True for messages after which the list must be fetched again
    pub fn refetches(msg: &InstanceListMsg) -> bool {
        matches!(
            msg,
            InstanceListMsg::CycleYear | InstanceListMsg::CycleSemester | InstanceListMsg::ClearFilters
        )
    }

    pub fn update(&mut self, msg: InstanceListMsg, ctx: &UpdateContext<'_>) -> Vec<Cmd> {
        match msg {
            InstanceListMsg::SelectNext => {
                self.selected = selection::next(self.selected, self.visible().len());
            }
            InstanceListMsg::SelectPrev => {
                self.selected = selection::prev(self.selected);
            }
            InstanceListMsg::StartSearch => {
                self.search.editing = true;
            }
            InstanceListMsg::SearchKey(key) => {
                self.search.input = ctx.text_area.apply_keys(&self.search.input, &[key]);
                self.selected = 0;
            }
            InstanceListMsg::EndSearch => {
                self.search.editing = false;
            }
            InstanceListMsg::ClearSearch => {
                self.search = SearchState::default();
                self.clamp_selection();
            }
            InstanceListMsg::CycleYear => {
                self.year = cycle(self.year, &self.known_years);
                self.selected = 0;
            }
            InstanceListMsg::CycleSemester => {
                self.semester = cycle(self.semester, &SEMESTERS);
                self.selected = 0;
            }
            InstanceListMsg::ClearFilters => {
                self.year = None;
                self.semester = None;
                self.search = SearchState::default();
                self.selected = 0;
            }
            InstanceListMsg::OpenSelected | InstanceListMsg::RequestDelete => {}
        }
        vec![]
    }
}
