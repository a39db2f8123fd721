// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{GalleryProject, GalleryProjectId};

/// Gallery image viewer state.
///
/// While open, `image_index < image_count` always holds. Transitions that
/// would break that (or that only make sense while open) are ignored and
/// leave the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open {
        project_id: GalleryProjectId,
        image_index: usize,
        image_count: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxOutcome {
    Changed,
    Ignored,
}

impl LightboxOutcome {
    pub const fn changed(self) -> bool {
        matches!(self, Self::Changed)
    }
}

impl LightboxState {
    pub fn open(&mut self, project: &GalleryProject, index: usize) -> LightboxOutcome {
        self.open_with(project.id, project.images.len(), index)
    }

    pub fn open_with(
        &mut self,
        project_id: GalleryProjectId,
        image_count: usize,
        index: usize,
    ) -> LightboxOutcome {
        if index >= image_count {
            return LightboxOutcome::Ignored;
        }
        *self = Self::Open {
            project_id,
            image_index: index,
            image_count,
        };
        LightboxOutcome::Changed
    }

    pub fn close(&mut self) -> LightboxOutcome {
        if !self.is_open() {
            return LightboxOutcome::Ignored;
        }
        *self = Self::Closed;
        LightboxOutcome::Changed
    }

    pub fn next(&mut self) -> LightboxOutcome {
        self.step(|index, count| (index + 1) % count)
    }

    pub fn prev(&mut self) -> LightboxOutcome {
        self.step(|index, count| (index + count - 1) % count)
    }

    pub fn jump_to(&mut self, index: usize) -> LightboxOutcome {
        match self {
            Self::Open { image_count, .. } if index >= *image_count => LightboxOutcome::Ignored,
            Self::Open { image_index, .. } => {
                *image_index = index;
                LightboxOutcome::Changed
            }
            Self::Closed => LightboxOutcome::Ignored,
        }
    }

    fn step(&mut self, advance: impl FnOnce(usize, usize) -> usize) -> LightboxOutcome {
        match self {
            Self::Open {
                image_index,
                image_count,
                ..
            } => {
                *image_index = advance(*image_index, *image_count);
                LightboxOutcome::Changed
            }
            Self::Closed => LightboxOutcome::Ignored,
        }
    }

    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub const fn project_id(&self) -> Option<GalleryProjectId> {
        match self {
            Self::Open { project_id, .. } => Some(*project_id),
            Self::Closed => None,
        }
    }

    pub const fn image_index(&self) -> Option<usize> {
        match self {
            Self::Open { image_index, .. } => Some(*image_index),
            Self::Closed => None,
        }
    }

    /// One-based position label such as `2 / 4`.
    pub fn counter_label(&self) -> Option<String> {
        match self {
            Self::Open {
                image_index,
                image_count,
                ..
            } => Some(format!("{} / {}", image_index + 1, image_count)),
            Self::Closed => None,
        }
    }

    pub fn current_image<'a>(&self, project: &'a GalleryProject) -> Option<&'a str> {
        match self {
            Self::Open {
                project_id,
                image_index,
                ..
            } if *project_id == project.id => project.images.get(*image_index).map(String::as_str),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LightboxOutcome, LightboxState};
    use crate::{GalleryCategory, GalleryProject, GalleryProjectId};

    fn project(id: i64, images: &[&str]) -> GalleryProject {
        GalleryProject {
            id: GalleryProjectId::new(id),
            title: format!("project {id}"),
            category: GalleryCategory::Industrial,
            images: images.iter().map(|image| (*image).to_owned()).collect(),
        }
    }

    #[test]
    fn next_wraps_after_last_image() {
        let abc = project(1, &["A", "B", "C"]);
        let mut lightbox = LightboxState::default();
        lightbox.open(&abc, 0);

        let mut seen = Vec::new();
        for _ in 0..3 {
            lightbox.next();
            seen.push(lightbox.current_image(&abc));
        }
        assert_eq!(seen, vec![Some("B"), Some("C"), Some("A")]);
    }

    #[test]
    fn prev_from_first_goes_to_last() {
        let four = project(1, &["a", "b", "c", "d"]);
        let mut lightbox = LightboxState::default();
        lightbox.open(&four, 0);
        lightbox.prev();
        assert_eq!(lightbox.image_index(), Some(3));
        assert_eq!(lightbox.counter_label().as_deref(), Some("4 / 4"));
    }

    #[test]
    fn n_steps_return_to_start() {
        let four = project(1, &["a", "b", "c", "d"]);
        for start in 0..4 {
            let mut lightbox = LightboxState::default();
            lightbox.open(&four, start);
            for _ in 0..4 {
                lightbox.next();
            }
            assert_eq!(lightbox.image_index(), Some(start));
            for _ in 0..4 {
                lightbox.prev();
            }
            assert_eq!(lightbox.image_index(), Some(start));
        }
    }

    #[test]
    fn single_image_project_stays_put() {
        let solo = project(9, &["only"]);
        let mut lightbox = LightboxState::default();
        lightbox.open(&solo, 0);
        assert_eq!(lightbox.next(), LightboxOutcome::Changed);
        assert_eq!(lightbox.image_index(), Some(0));
        assert_eq!(lightbox.prev(), LightboxOutcome::Changed);
        assert_eq!(lightbox.image_index(), Some(0));
    }

    #[test]
    fn opening_another_project_uses_its_own_index() {
        let a = project(1, &["a0", "a1", "a2", "a3"]);
        let b = project(2, &["b0", "b1", "b2"]);
        let mut lightbox = LightboxState::default();

        lightbox.open(&a, 0);
        lightbox.next();
        lightbox.next();
        lightbox.next();
        assert_eq!(lightbox.image_index(), Some(3));

        lightbox.open(&b, 1);
        assert_eq!(lightbox.project_id(), Some(b.id));
        assert_eq!(lightbox.image_index(), Some(1));
        assert_eq!(lightbox.current_image(&b), Some("b1"));
        assert_eq!(lightbox.current_image(&a), None);
    }

    #[test]
    fn navigation_while_closed_is_ignored() {
        let mut lightbox = LightboxState::default();
        assert_eq!(lightbox.next(), LightboxOutcome::Ignored);
        assert_eq!(lightbox.prev(), LightboxOutcome::Ignored);
        assert_eq!(lightbox.jump_to(0), LightboxOutcome::Ignored);
        assert_eq!(lightbox.close(), LightboxOutcome::Ignored);
        assert_eq!(lightbox, LightboxState::Closed);
    }

    #[test]
    fn out_of_range_indices_are_ignored() {
        let abc = project(1, &["A", "B", "C"]);
        let mut lightbox = LightboxState::default();

        assert_eq!(lightbox.open(&abc, 3), LightboxOutcome::Ignored);
        assert!(!lightbox.is_open());

        let empty = project(2, &[]);
        assert_eq!(lightbox.open(&empty, 0), LightboxOutcome::Ignored);
        assert!(!lightbox.is_open());

        lightbox.open(&abc, 1);
        assert_eq!(lightbox.jump_to(7), LightboxOutcome::Ignored);
        assert_eq!(lightbox.image_index(), Some(1));
        assert_eq!(lightbox.jump_to(2), LightboxOutcome::Changed);
        assert_eq!(lightbox.current_image(&abc), Some("C"));
    }

    #[test]
    fn close_resets_state() {
        let abc = project(1, &["A", "B", "C"]);
        let mut lightbox = LightboxState::default();
        lightbox.open(&abc, 2);
        assert!(lightbox.close().changed());
        assert_eq!(lightbox, LightboxState::Closed);
        assert_eq!(lightbox.project_id(), None);
        assert_eq!(lightbox.counter_label(), None);
    }
}
