use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt::{Display, Formatter, Result};

pub const FORM_HISTORY_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormResult {
    Win,
    Draw,
    Loss,
}

impl FormResult {
    pub fn as_char(&self) -> char {
        match self {
            FormResult::Win => 'W',
            FormResult::Draw => 'D',
            FormResult::Loss => 'L',
        }
    }

    /// Contribution of a single result to home advantage.
    pub fn home_advantage_points(&self) -> i32 {
        match self {
            FormResult::Win => 3,
            FormResult::Draw => 1,
            FormResult::Loss => -1,
        }
    }
}

/// Bounded log of recent results, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    items: VecDeque<FormResult>,
}

impl Form {
    pub fn new() -> Self {
        Form {
            items: VecDeque::with_capacity(FORM_HISTORY_SIZE),
        }
    }

    pub fn add(&mut self, result: FormResult) {
        self.items.push_front(result);
        self.items.truncate(FORM_HISTORY_SIZE);
    }

    /// Up to `length` results, most recent first.
    pub fn recent(&self, length: usize) -> impl Iterator<Item = FormResult> + '_ {
        self.items.iter().copied().take(length)
    }

    pub fn home_advantage(&self, length: usize) -> i32 {
        self.recent(length)
            .map(|result| result.home_advantage_points())
            .sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Table style summary of the last `length` results, oldest first.
    pub fn summary(&self, length: usize) -> String {
        let recent: Vec<char> = self.recent(length).map(|r| r.as_char()).collect();
        recent.into_iter().rev().collect()
    }
}

impl FromIterator<FormResult> for Form {
    /// Builds a form log from results given oldest first.
    fn from_iter<T: IntoIterator<Item = FormResult>>(iter: T) -> Self {
        let mut form = Form::new();
        for result in iter {
            form.add(result);
        }
        form
    }
}

impl Display for Form {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(&self.summary(FORM_HISTORY_SIZE))
    }
}
