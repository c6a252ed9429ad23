// Recording host shared by the carousel tests.

#![allow(dead_code)]

use folio_core::{CarouselError, CarouselHost, Layout, SectionBox};
use std::cell::Cell;

#[derive(Debug)]
pub struct FakeHost {
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub card_count: usize,
    pub card_width: f64,
    pub gap: f64,
    pub content_width: f64,
    pub section_top: f64,
    pub section_height: f64,
    pub row_present: bool,
    pub section_present: bool,

    pub offsets: Vec<f64>,
    pub dots: Vec<bool>,
    pub helper_visible: bool,
    pub helper_writes: usize,
    pub section_reads: Cell<usize>,
}

impl FakeHost {
    /// Narrow phone viewport, 3 cards of 300px with a 32px gap.
    pub fn compact() -> Self {
        Self {
            viewport_width: 390.0,
            viewport_height: 800.0,
            card_count: 3,
            card_width: 300.0,
            gap: 32.0,
            content_width: 3.0 * 300.0 + 2.0 * 32.0,
            section_top: 200.0,
            section_height: 2000.0,
            row_present: true,
            section_present: true,
            offsets: Vec::new(),
            dots: vec![false; 3],
            helper_visible: true,
            helper_writes: 0,
            section_reads: Cell::new(0),
        }
    }

    /// Desktop viewport with a wide row.
    pub fn wide() -> Self {
        Self {
            viewport_width: 1280.0,
            content_width: 3000.0,
            ..Self::compact()
        }
    }

    pub fn last_offset(&self) -> Option<f64> {
        self.offsets.last().copied()
    }

    pub fn active_dots(&self) -> Vec<usize> {
        self.dots
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(i, _)| i)
            .collect()
    }
}

impl CarouselHost for FakeHost {
    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn measure(&self) -> Result<Layout, CarouselError> {
        if !self.row_present {
            return Err(CarouselError::MissingElement(".projects-container"));
        }
        Layout::new(
            self.card_count,
            self.card_width,
            self.gap,
            self.content_width,
            self.viewport_width,
        )
    }

    fn section(&self) -> Result<SectionBox, CarouselError> {
        self.section_reads.set(self.section_reads.get() + 1);
        if !self.section_present {
            return Err(CarouselError::MissingElement(".work-section"));
        }
        Ok(SectionBox {
            top: self.section_top,
            height: self.section_height,
            viewport_height: self.viewport_height,
        })
    }

    fn set_offset(&mut self, offset_px: f64) {
        self.offsets.push(offset_px);
    }

    fn set_active_dot(&mut self, index: usize) {
        for (i, dot) in self.dots.iter_mut().enumerate() {
            *dot = i == index;
        }
    }

    fn set_helper_visible(&mut self, visible: bool) {
        self.helper_visible = visible;
        self.helper_writes += 1;
    }
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}
