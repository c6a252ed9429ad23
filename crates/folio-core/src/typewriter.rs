//! Fun-fact typewriter for the hero label.
//!
//! Types a fact one character at a time, holds it, deletes it faster, pauses,
//! then moves to the next fact. The host schedules each step with the returned
//! delay.

use crate::constants::{
    DELETE_DELAY_MS, HOLD_DELETED_MS, HOLD_TYPED_MS, TYPE_DELAY_BASE_MS, TYPE_DELAY_JITTER_MS,
};

pub const FUN_FACTS: &[&str] = &[
    "THE FIRST COMPUTER BUG WAS A REAL MOTH",
    "AI DREAMS IN VECTORS",
    "PYTHON IS NAMED AFTER MONTY PYTHON",
    "404: REALITY NOT FOUND",
    "CODE IS POETRY",
    "RETICULATING SPLINES",
    "DOWNLOADING MORE RAM...",
    "CENTERING A DIV IS HARDER THAN AI",
    "EXITING VIM IS IMPOSSIBLE",
    "THERE IS NO CLOUD, JUST LINUX SERVERS",
    "I AM NOT A ROBOT (PROBABLY)",
    "JAVASCRIPT WAS BUILT IN 10 DAYS",
    "COMPILING LIFE DECISIONS...",
    "CTRL+C CTRL+V",
    "IT'S NOT A BUG, IT'S A FEATURE",
    "TEACHING SAND TO THINK",
    "HELLO WORLD, HELLO UNIVERSE",
    "QUANTUM FLUX STABILIZED",
];

#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub text: String,
    pub delay_ms: f64,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    facts: Vec<String>,
    fact_index: usize,
    chars: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new<I, S>(facts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            facts: facts.into_iter().map(Into::into).collect(),
            fact_index: 0,
            chars: 0,
            deleting: false,
        }
    }

    pub fn fact_index(&self) -> usize {
        self.fact_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Advance by one character. `jitter` in `[0, 1)` varies the typing speed.
    /// Returns `None` when there is nothing to type.
    pub fn step(&mut self, jitter: f64) -> Option<Step> {
        let fact = self.facts.get(self.fact_index)?;
        let len = fact.chars().count();
        if len == 0 {
            self.fact_index = (self.fact_index + 1) % self.facts.len();
            return Some(Step {
                text: String::new(),
                delay_ms: HOLD_DELETED_MS,
            });
        }

        let mut delay_ms;
        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
            delay_ms = DELETE_DELAY_MS;
        } else {
            self.chars = (self.chars + 1).min(len);
            delay_ms = TYPE_DELAY_BASE_MS + jitter.clamp(0.0, 1.0) * TYPE_DELAY_JITTER_MS;
        }
        let text: String = fact.chars().take(self.chars).collect();

        if !self.deleting && self.chars == len {
            self.deleting = true;
            delay_ms = HOLD_TYPED_MS;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.fact_index = (self.fact_index + 1) % self.facts.len();
            delay_ms = HOLD_DELETED_MS;
        }
        Some(Step { text, delay_ms })
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(FUN_FACTS.iter().copied())
    }
}
