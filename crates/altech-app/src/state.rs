// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use tracing::debug;

use crate::{
    CapacityFilter, CategoryFilter, EquipmentCategory, FeaturedProjectId, FilterSelection,
    GalleryCategory, GalleryProjectId, LightboxOutcome, LightboxState, PageKind,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub active_page: PageKind,
    pub equipment_filter: FilterSelection,
    pub gallery_category: CategoryFilter<GalleryCategory>,
    pub lightbox: LightboxState,
    pub project_detail: Option<FeaturedProjectId>,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            active_page: PageKind::Home,
            equipment_filter: FilterSelection::default(),
            gallery_category: CategoryFilter::All,
            lightbox: LightboxState::Closed,
            project_detail: None,
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    NextPage,
    PrevPage,
    OpenPage(PageKind),
    SelectEquipmentCategory(CategoryFilter<EquipmentCategory>),
    SelectCapacity(CapacityFilter),
    SelectGalleryCategory(CategoryFilter<GalleryCategory>),
    OpenLightbox {
        project: GalleryProjectId,
        image_count: usize,
        index: usize,
    },
    CloseLightbox,
    NextImage,
    PrevImage,
    JumpToImage(usize),
    OpenProjectDetail(FeaturedProjectId),
    CloseProjectDetail,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    PageChanged(PageKind),
    EquipmentFilterChanged(FilterSelection),
    GalleryFilterChanged(CategoryFilter<GalleryCategory>),
    LightboxOpened {
        project: GalleryProjectId,
        index: usize,
    },
    LightboxClosed,
    ImageChanged(usize),
    ProjectDetailOpened(FeaturedProjectId),
    ProjectDetailClosed,
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    /// Applies `command` and reports what changed so the view can redraw.
    ///
    /// Commands that do not apply in the current state (image navigation with
    /// the lightbox closed, out-of-range image indices) produce no events.
    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::NextPage => self.rotate_page(1),
            AppCommand::PrevPage => self.rotate_page(-1),
            AppCommand::OpenPage(page) => self.set_page(page),
            AppCommand::SelectEquipmentCategory(category) => {
                self.equipment_filter.select_category(category);
                vec![AppEvent::EquipmentFilterChanged(
                    self.equipment_filter.clone(),
                )]
            }
            AppCommand::SelectCapacity(capacity) => {
                self.equipment_filter.select_capacity(capacity);
                vec![AppEvent::EquipmentFilterChanged(
                    self.equipment_filter.clone(),
                )]
            }
            AppCommand::SelectGalleryCategory(category) => {
                self.gallery_category = category;
                vec![AppEvent::GalleryFilterChanged(category)]
            }
            AppCommand::OpenLightbox {
                project,
                image_count,
                index,
            } => {
                let outcome = self.lightbox.open_with(project, image_count, index);
                self.lightbox_events(outcome, "open", || AppEvent::LightboxOpened {
                    project,
                    index,
                })
            }
            AppCommand::CloseLightbox => {
                let outcome = self.lightbox.close();
                self.lightbox_events(outcome, "close", || AppEvent::LightboxClosed)
            }
            AppCommand::NextImage => {
                let outcome = self.lightbox.next();
                self.image_changed(outcome, "next")
            }
            AppCommand::PrevImage => {
                let outcome = self.lightbox.prev();
                self.image_changed(outcome, "prev")
            }
            AppCommand::JumpToImage(index) => {
                let outcome = self.lightbox.jump_to(index);
                self.image_changed(outcome, "jump")
            }
            AppCommand::OpenProjectDetail(id) => {
                self.project_detail = Some(id);
                vec![AppEvent::ProjectDetailOpened(id)]
            }
            AppCommand::CloseProjectDetail => match self.project_detail.take() {
                Some(_) => vec![AppEvent::ProjectDetailClosed],
                None => Vec::new(),
            },
            AppCommand::SetStatus(message) => vec![self.set_status(&message)],
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    fn rotate_page(&mut self, delta: isize) -> Vec<AppEvent> {
        let pages = PageKind::ALL;
        let current = pages
            .iter()
            .position(|page| *page == self.active_page)
            .unwrap_or(0) as isize;
        let len = pages.len() as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.set_page(pages[next])
    }

    fn set_page(&mut self, page: PageKind) -> Vec<AppEvent> {
        let mut events = Vec::new();
        if self.lightbox.close().changed() {
            events.push(AppEvent::LightboxClosed);
        }
        if self.project_detail.take().is_some() {
            events.push(AppEvent::ProjectDetailClosed);
        }
        if page != self.active_page {
            debug!(from = self.active_page.label(), to = page.label(), "page change");
            self.active_page = page;
        }
        events.push(AppEvent::PageChanged(page));
        events
    }

    fn lightbox_events(
        &self,
        outcome: LightboxOutcome,
        action: &str,
        event: impl FnOnce() -> AppEvent,
    ) -> Vec<AppEvent> {
        match outcome {
            LightboxOutcome::Changed => vec![event()],
            LightboxOutcome::Ignored => {
                debug!(action, lightbox = ?self.lightbox, "lightbox transition ignored");
                Vec::new()
            }
        }
    }

    fn image_changed(&self, outcome: LightboxOutcome, action: &str) -> Vec<AppEvent> {
        let index = self.lightbox.image_index().unwrap_or_default();
        self.lightbox_events(outcome, action, || AppEvent::ImageChanged(index))
    }

    fn set_status(&mut self, message: &str) -> AppEvent {
        self.status_line = Some(message.to_owned());
        AppEvent::StatusUpdated(message.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppCommand, AppEvent, AppState};
    use crate::{
        CapacityFilter, CategoryFilter, EquipmentCategory, FeaturedProjectId, FilterSelection,
        GalleryCategory, GalleryProjectId, LightboxState, PageKind,
    };

    fn open_lightbox(state: &mut AppState, project: i64, image_count: usize, index: usize) {
        state.dispatch(AppCommand::OpenLightbox {
            project: GalleryProjectId::new(project),
            image_count,
            index,
        });
    }

    #[test]
    fn page_rotation_wraps() {
        let mut state = AppState {
            active_page: PageKind::Gallery,
            ..AppState::default()
        };

        let events = state.dispatch(AppCommand::NextPage);
        assert_eq!(state.active_page, PageKind::Home);
        assert_eq!(events, vec![AppEvent::PageChanged(PageKind::Home)]);

        state.dispatch(AppCommand::PrevPage);
        assert_eq!(state.active_page, PageKind::Gallery);
    }

    #[test]
    fn filter_commands_emit_current_selection() {
        let mut state = AppState::default();

        let events = state.dispatch(AppCommand::SelectEquipmentCategory(CategoryFilter::Only(
            EquipmentCategory::SupportEquipment,
        )));
        let expected = FilterSelection {
            category: CategoryFilter::Only(EquipmentCategory::SupportEquipment),
            capacity: CapacityFilter::AllCapacities,
        };
        assert_eq!(events, vec![AppEvent::EquipmentFilterChanged(expected)]);

        let heavy = CapacityFilter::range("400+ Ton", 400, None);
        state.dispatch(AppCommand::SelectCapacity(heavy.clone()));
        assert_eq!(state.equipment_filter.capacity, heavy);
        assert_eq!(
            state.equipment_filter.category,
            CategoryFilter::Only(EquipmentCategory::SupportEquipment)
        );

        let events = state.dispatch(AppCommand::SelectGalleryCategory(CategoryFilter::Only(
            GalleryCategory::OilGas,
        )));
        assert_eq!(
            events,
            vec![AppEvent::GalleryFilterChanged(CategoryFilter::Only(
                GalleryCategory::OilGas
            ))]
        );
    }

    #[test]
    fn lightbox_round_trip() {
        let mut state = AppState {
            active_page: PageKind::Gallery,
            ..AppState::default()
        };

        open_lightbox(&mut state, 3, 3, 0);
        assert!(state.lightbox.is_open());

        assert_eq!(
            state.dispatch(AppCommand::NextImage),
            vec![AppEvent::ImageChanged(1)]
        );
        assert_eq!(
            state.dispatch(AppCommand::PrevImage),
            vec![AppEvent::ImageChanged(0)]
        );
        assert_eq!(
            state.dispatch(AppCommand::PrevImage),
            vec![AppEvent::ImageChanged(2)]
        );
        assert_eq!(
            state.dispatch(AppCommand::JumpToImage(1)),
            vec![AppEvent::ImageChanged(1)]
        );
        assert_eq!(
            state.dispatch(AppCommand::CloseLightbox),
            vec![AppEvent::LightboxClosed]
        );
        assert_eq!(state.lightbox, LightboxState::Closed);
    }

    #[test]
    fn ignored_lightbox_commands_emit_nothing() {
        let mut state = AppState::default();
        assert!(state.dispatch(AppCommand::NextImage).is_empty());
        assert!(state.dispatch(AppCommand::PrevImage).is_empty());
        assert!(state.dispatch(AppCommand::JumpToImage(0)).is_empty());
        assert!(state.dispatch(AppCommand::CloseLightbox).is_empty());

        open_lightbox(&mut state, 1, 2, 5);
        assert!(!state.lightbox.is_open());

        open_lightbox(&mut state, 1, 2, 1);
        assert!(state.dispatch(AppCommand::JumpToImage(2)).is_empty());
        assert_eq!(state.lightbox.image_index(), Some(1));
    }

    #[test]
    fn leaving_gallery_discards_lightbox() {
        let mut state = AppState {
            active_page: PageKind::Gallery,
            ..AppState::default()
        };
        open_lightbox(&mut state, 2, 4, 3);

        let events = state.dispatch(AppCommand::OpenPage(PageKind::Equipment));
        assert_eq!(
            events,
            vec![
                AppEvent::LightboxClosed,
                AppEvent::PageChanged(PageKind::Equipment),
            ]
        );
        assert_eq!(state.lightbox, LightboxState::Closed);
    }

    #[test]
    fn project_detail_open_and_close() {
        let mut state = AppState::default();
        let id = FeaturedProjectId::new(2);

        assert_eq!(
            state.dispatch(AppCommand::OpenProjectDetail(id)),
            vec![AppEvent::ProjectDetailOpened(id)]
        );
        assert_eq!(state.project_detail, Some(id));

        assert_eq!(
            state.dispatch(AppCommand::CloseProjectDetail),
            vec![AppEvent::ProjectDetailClosed]
        );
        assert!(state.dispatch(AppCommand::CloseProjectDetail).is_empty());

        state.dispatch(AppCommand::OpenProjectDetail(id));
        let events = state.dispatch(AppCommand::NextPage);
        assert_eq!(
            events,
            vec![
                AppEvent::ProjectDetailClosed,
                AppEvent::PageChanged(PageKind::About),
            ]
        );
    }

    #[test]
    fn status_set_and_clear() {
        let mut state = AppState::default();
        let events = state.dispatch(AppCommand::SetStatus("3 of 10 items".to_owned()));
        assert_eq!(state.status_line.as_deref(), Some("3 of 10 items"));
        assert_eq!(
            events,
            vec![AppEvent::StatusUpdated("3 of 10 items".to_owned())]
        );

        state.dispatch(AppCommand::ClearStatus);
        assert_eq!(state.status_line, None);
    }
}
