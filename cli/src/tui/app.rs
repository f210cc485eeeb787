use liftlog_core::{Archetype, ExerciseSummary, SummaryDocument, WeekSummary};
use ratatui::widgets::ListState;

pub struct App {
    pub archetype: Archetype,
    pub document: SummaryDocument,
    pub names: Vec<String>,
    pub state: ListState,
}

impl App {
    pub fn new(archetype: Archetype, document: SummaryDocument) -> App {
        let names: Vec<String> = document.exercises.keys().cloned().collect();
        let mut state = ListState::default();
        if !names.is_empty() {
            state.select(Some(0));
        }
        App {
            archetype,
            document,
            names,
            state,
        }
    }

    pub fn next(&mut self) {
        if self.names.is_empty() {
            return;
        }

        let i = match self.state.selected() {
            Some(i) => {
                if i >= self.names.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.names.is_empty() {
            return;
        }

        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    self.names.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn selected(&self) -> Option<(&str, &ExerciseSummary)> {
        let name = self.names.get(self.state.selected()?)?;
        let exercise = self.document.exercises.get(name)?;
        Some((name.as_str(), exercise))
    }

    /// Most recent week of the selected exercise.
    pub fn latest_week(&self) -> Option<(&str, &WeekSummary)> {
        let (_, exercise) = self.selected()?;
        exercise.weeks.iter().next_back().map(|(week, w)| (week.as_str(), w))
    }
}
