// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use altech_app::{
    AppCommand, AppEvent, AppState, CapacityFilter, CatalogItem, Category, CategoryFilter,
    EquipmentCategory, FeaturedProject, GalleryCategory, GalleryProject, LightboxState, PageKind,
    filter_projects,
};
use altech_content::SiteContent;
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs, Wrap};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

const NO_EQUIPMENT_MESSAGE: &str = "No equipment found matching your filters.";
const NO_PROJECTS_MESSAGE: &str = "No projects in this category.";
const THUMB_ACTIVE_OPEN: &str = "[";
const THUMB_ACTIVE_CLOSE: &str = "]";

/// Supplies the content the views render.
pub trait AppRuntime {
    fn load_content(&mut self) -> Result<SiteContent>;

    fn reload_content(&mut self) -> Result<SiteContent> {
        self.load_content()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    pub status_timeout: Duration,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            status_timeout: Duration::from_secs(4),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Cursors {
    equipment_row: usize,
    gallery_project: usize,
    gallery_image: usize,
    featured_project: usize,
}

#[derive(Debug, Clone, PartialEq)]
struct ViewData {
    content: SiteContent,
    cursors: Cursors,
    help_visible: bool,
    status_token: u64,
    status_timeout: Duration,
    footer_year: i32,
}

impl ViewData {
    fn new(content: SiteContent, options: UiOptions) -> Self {
        Self {
            content,
            cursors: Cursors::default(),
            help_visible: false,
            status_token: 0,
            status_timeout: options.status_timeout,
            footer_year: OffsetDateTime::now_utc().year(),
        }
    }
}

pub fn run_app<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    options: UiOptions,
) -> Result<()> {
    let content = runtime.load_content().context("load site content")?;
    let mut view_data = ViewData::new(content, options);
    let (internal_tx, internal_rx) = mpsc::channel();

    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    info!(page = state.active_page.label(), "terminal session started");

    let mut result = Ok(());
    loop {
        process_internal_events(state, &view_data, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = match event::poll(Duration::from_millis(120)).context("poll event") {
            Ok(has_event) => has_event,
            Err(error) => {
                result = Err(error);
                break;
            }
        };
        if has_event {
            match event::read().context("read event") {
                Ok(Event::Key(key)) => {
                    if handle_key_event(state, runtime, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                Ok(_) => {}
                Err(error) => {
                    result = Err(error);
                    break;
                }
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    info!("terminal session ended");
    result
}

fn process_internal_events(
    state: &mut AppState,
    view_data: &ViewData,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64, after: Duration) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(after);
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    dispatch_and_sync(
        state,
        view_data,
        internal_tx,
        AppCommand::SetStatus(message.into()),
    );
}

/// Returns `true` when the user asked to quit.
fn handle_key_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    if view_data.help_visible {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            view_data.help_visible = false;
        }
        return false;
    }

    if state.lightbox.is_open() {
        handle_lightbox_key(state, view_data, internal_tx, key);
        return false;
    }

    if state.project_detail.is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            dispatch_and_sync(state, view_data, internal_tx, AppCommand::CloseProjectDetail);
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('?') => view_data.help_visible = true,
        KeyCode::Tab => {
            dispatch_and_sync(state, view_data, internal_tx, AppCommand::NextPage);
        }
        KeyCode::BackTab => {
            dispatch_and_sync(state, view_data, internal_tx, AppCommand::PrevPage);
        }
        KeyCode::Char(digit @ '1'..='5') => {
            let index = digit as usize - '1' as usize;
            dispatch_and_sync(
                state,
                view_data,
                internal_tx,
                AppCommand::OpenPage(PageKind::ALL[index]),
            );
        }
        KeyCode::Char('r') => reload_content(state, runtime, view_data, internal_tx),
        _ => match state.active_page {
            PageKind::Home => handle_home_key(state, view_data, internal_tx, key),
            PageKind::Equipment => handle_equipment_key(state, view_data, internal_tx, key),
            PageKind::Gallery => handle_gallery_key(state, view_data, internal_tx, key),
            PageKind::About | PageKind::Services => {}
        },
    }
    false
}

fn handle_home_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let count = view_data.content.featured_projects.len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            view_data.cursors.featured_project =
                step_cursor(view_data.cursors.featured_project, 1, count);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            view_data.cursors.featured_project =
                step_cursor(view_data.cursors.featured_project, -1, count);
        }
        KeyCode::Enter => {
            let Some(project) = view_data
                .content
                .featured_projects
                .get(view_data.cursors.featured_project)
            else {
                return;
            };
            let id = project.id;
            dispatch_and_sync(state, view_data, internal_tx, AppCommand::OpenProjectDetail(id));
        }
        _ => {}
    }
}

fn handle_equipment_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let command = match key.code {
        KeyCode::Char('c') => Some(AppCommand::SelectEquipmentCategory(
            state.equipment_filter.category.cycle(1),
        )),
        KeyCode::Char('C') => Some(AppCommand::SelectEquipmentCategory(
            state.equipment_filter.category.cycle(-1),
        )),
        KeyCode::Char('t') => Some(AppCommand::SelectCapacity(cycle_capacity(
            &view_data.content.capacity_filters,
            &state.equipment_filter.capacity,
            1,
        ))),
        KeyCode::Char('T') => Some(AppCommand::SelectCapacity(cycle_capacity(
            &view_data.content.capacity_filters,
            &state.equipment_filter.capacity,
            -1,
        ))),
        KeyCode::Char('x') => {
            dispatch_and_sync(
                state,
                view_data,
                internal_tx,
                AppCommand::SelectEquipmentCategory(CategoryFilter::All),
            );
            Some(AppCommand::SelectCapacity(CapacityFilter::AllCapacities))
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let count = visible_equipment(state, &view_data.content).len();
            view_data.cursors.equipment_row = step_cursor(view_data.cursors.equipment_row, 1, count);
            None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            let count = visible_equipment(state, &view_data.content).len();
            view_data.cursors.equipment_row =
                step_cursor(view_data.cursors.equipment_row, -1, count);
            None
        }
        _ => None,
    };

    if let Some(command) = command {
        dispatch_and_sync(state, view_data, internal_tx, command);
        let shown = visible_equipment(state, &view_data.content).len();
        let total = view_data.content.catalog.len();
        emit_status(
            state,
            view_data,
            internal_tx,
            format!("{shown} of {total} items"),
        );
    }
}

fn handle_gallery_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') => {
            let delta = if key.code == KeyCode::Char('c') { 1 } else { -1 };
            let category = state.gallery_category.cycle(delta);
            dispatch_and_sync(
                state,
                view_data,
                internal_tx,
                AppCommand::SelectGalleryCategory(category),
            );
        }
        KeyCode::Char('j') | KeyCode::Down => move_gallery_project(state, view_data, 1),
        KeyCode::Char('k') | KeyCode::Up => move_gallery_project(state, view_data, -1),
        KeyCode::Char('l') | KeyCode::Right => move_gallery_image(state, view_data, 1),
        KeyCode::Char('h') | KeyCode::Left => move_gallery_image(state, view_data, -1),
        KeyCode::Enter => {
            let Some(project) = selected_gallery_project(state, view_data) else {
                return;
            };
            let command = AppCommand::OpenLightbox {
                project: project.id,
                image_count: project.images.len(),
                index: view_data.cursors.gallery_image,
            };
            dispatch_and_sync(state, view_data, internal_tx, command);
        }
        _ => {}
    }
}

fn handle_lightbox_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let command = match key.code {
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => AppCommand::NextImage,
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => AppCommand::PrevImage,
        KeyCode::Char(digit @ '1'..='9') => {
            AppCommand::JumpToImage(digit as usize - '1' as usize)
        }
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => AppCommand::CloseLightbox,
        _ => return,
    };

    let jump = matches!(command, AppCommand::JumpToImage(_));
    let events = dispatch_and_sync(state, view_data, internal_tx, command);
    if jump && events.is_empty() {
        emit_status(state, view_data, internal_tx, "no image at that position");
    }
}

fn reload_content<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    match runtime.reload_content() {
        Ok(content) => {
            apply_reloaded_content(state, view_data, internal_tx, content);
            info!(
                equipment = view_data.content.catalog.len(),
                projects = view_data.content.gallery.len(),
                "content reloaded"
            );
            emit_status(state, view_data, internal_tx, "content reloaded");
        }
        Err(error) => {
            warn!(error = %format!("{error:#}"), "content reload failed");
            emit_status(
                state,
                view_data,
                internal_tx,
                format!("reload failed: {error:#}; keeping previous content"),
            );
        }
    }
}

fn apply_reloaded_content(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    content: SiteContent,
) {
    if !content
        .capacity_filters
        .contains(&state.equipment_filter.capacity)
    {
        dispatch_and_sync(
            state,
            view_data,
            internal_tx,
            AppCommand::SelectCapacity(CapacityFilter::AllCapacities),
        );
    }
    if let LightboxState::Open {
        project_id,
        image_index,
        image_count,
    } = state.lightbox
    {
        match content.gallery_project(project_id) {
            None => {
                dispatch_and_sync(state, view_data, internal_tx, AppCommand::CloseLightbox);
            }
            Some(project) if project.images.len() != image_count => {
                let count = project.images.len();
                let command = AppCommand::OpenLightbox {
                    project: project_id,
                    image_count: count,
                    index: image_index.min(count.saturating_sub(1)),
                };
                if dispatch_and_sync(state, view_data, internal_tx, command).is_empty() {
                    dispatch_and_sync(state, view_data, internal_tx, AppCommand::CloseLightbox);
                }
            }
            Some(_) => {}
        }
    }
    if let Some(id) = state.project_detail
        && content.featured_project(id).is_none()
    {
        dispatch_and_sync(state, view_data, internal_tx, AppCommand::CloseProjectDetail);
    }
    view_data.content = content;
    clamp_cursors(state, view_data);
}

fn dispatch_and_sync(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    command: AppCommand,
) -> Vec<AppEvent> {
    let events = state.dispatch(command);
    for event in &events {
        match event {
            AppEvent::GalleryFilterChanged(_) => {
                view_data.cursors.gallery_project = 0;
                view_data.cursors.gallery_image = 0;
            }
            AppEvent::ImageChanged(index) => view_data.cursors.gallery_image = *index,
            AppEvent::LightboxOpened { index, .. } => view_data.cursors.gallery_image = *index,
            AppEvent::StatusUpdated(_) => {
                view_data.status_token = view_data.status_token.saturating_add(1);
                schedule_status_clear(
                    internal_tx,
                    view_data.status_token,
                    view_data.status_timeout,
                );
            }
            AppEvent::PageChanged(page) => debug!(page = page.label(), "page shown"),
            _ => {}
        }
    }
    if should_clamp_cursors(&events) {
        clamp_cursors(state, view_data);
    }
    events
}

fn should_clamp_cursors(events: &[AppEvent]) -> bool {
    events.iter().any(|event| {
        matches!(
            event,
            AppEvent::EquipmentFilterChanged(_) | AppEvent::GalleryFilterChanged(_)
        )
    })
}

fn clamp_cursors(state: &AppState, view_data: &mut ViewData) {
    let equipment = visible_equipment(state, &view_data.content).len();
    view_data.cursors.equipment_row = view_data
        .cursors
        .equipment_row
        .min(equipment.saturating_sub(1));

    let projects = filter_projects(&view_data.content.gallery, state.gallery_category);
    view_data.cursors.gallery_project = view_data
        .cursors
        .gallery_project
        .min(projects.len().saturating_sub(1));
    let images = projects
        .get(view_data.cursors.gallery_project)
        .map_or(0, |project| project.images.len());
    view_data.cursors.gallery_image = view_data
        .cursors
        .gallery_image
        .min(images.saturating_sub(1));

    view_data.cursors.featured_project = view_data
        .cursors
        .featured_project
        .min(view_data.content.featured_projects.len().saturating_sub(1));
}

fn step_cursor(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current as isize + delta).clamp(0, len as isize - 1) as usize
}

fn move_gallery_project(state: &AppState, view_data: &mut ViewData, delta: isize) {
    let count = filter_projects(&view_data.content.gallery, state.gallery_category).len();
    let next = step_cursor(view_data.cursors.gallery_project, delta, count);
    if next != view_data.cursors.gallery_project {
        view_data.cursors.gallery_project = next;
        view_data.cursors.gallery_image = 0;
    }
}

fn move_gallery_image(state: &AppState, view_data: &mut ViewData, delta: isize) {
    let count = selected_gallery_project(state, view_data).map_or(0, |p| p.images.len());
    view_data.cursors.gallery_image = step_cursor(view_data.cursors.gallery_image, delta, count);
}

fn selected_gallery_project<'a>(
    state: &AppState,
    view_data: &'a ViewData,
) -> Option<&'a GalleryProject> {
    filter_projects(&view_data.content.gallery, state.gallery_category)
        .get(view_data.cursors.gallery_project)
        .copied()
}

fn cycle_capacity(
    filters: &[CapacityFilter],
    current: &CapacityFilter,
    delta: isize,
) -> CapacityFilter {
    if filters.is_empty() {
        return CapacityFilter::AllCapacities;
    }
    let position = filters
        .iter()
        .position(|filter| filter == current)
        .unwrap_or(0) as isize;
    let len = filters.len() as isize;
    filters[(position + delta).rem_euclid(len) as usize].clone()
}

fn visible_equipment<'a>(state: &AppState, content: &'a SiteContent) -> Vec<&'a CatalogItem> {
    state.equipment_filter.apply(&content.catalog)
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let selected = PageKind::ALL
        .iter()
        .position(|page| *page == state.active_page)
        .unwrap_or(0);
    let titles = PageKind::ALL
        .iter()
        .enumerate()
        .map(|(index, page)| format!("{} {}", index + 1, page.label()))
        .collect::<Vec<String>>();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(view_data.content.about.company.clone())
                .borders(Borders::ALL),
        )
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .select(selected);
    frame.render_widget(tabs, layout[0]);

    match state.active_page {
        PageKind::Equipment => render_equipment(frame, layout[1], state, view_data),
        page => {
            let text = match page {
                PageKind::Home => render_home_text(&view_data.content, view_data.cursors),
                PageKind::About => render_about_text(&view_data.content),
                PageKind::Services => render_services_text(&view_data.content),
                PageKind::Gallery => render_gallery_text(state, view_data),
                PageKind::Equipment => String::new(),
            };
            let body = Paragraph::new(text)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title(page.label()));
            frame.render_widget(body, layout[1]);
        }
    }

    let status = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout[2]);

    if let Some(id) = state.project_detail
        && let Some(project) = view_data.content.featured_project(id)
    {
        let area = centered_rect(70, 60, frame.area());
        frame.render_widget(Clear, area);
        let detail = Paragraph::new(render_project_detail_text(project))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(project.title.clone())
                    .borders(Borders::ALL),
            );
        frame.render_widget(detail, area);
    }

    if let Some(text) = render_lightbox_overlay_text(&state.lightbox, &view_data.content) {
        let area = centered_rect(90, 80, frame.area());
        frame.render_widget(Clear, area);
        let lightbox = Paragraph::new(text).wrap(Wrap { trim: false }).block(
            Block::default()
                .title("lightbox")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::White).bg(Color::Black)),
        );
        frame.render_widget(lightbox, area);
    }

    if view_data.help_visible {
        let area = centered_rect(70, 70, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn render_equipment(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &AppState,
    view_data: &ViewData,
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(4),
            Constraint::Length(7),
        ])
        .split(area);

    let filters = Paragraph::new(filter_bar_text(state, &view_data.content)).block(
        Block::default()
            .title("complete equipment list")
            .borders(Borders::ALL),
    );
    frame.render_widget(filters, layout[0]);

    let items = visible_equipment(state, &view_data.content);
    if items.is_empty() {
        let empty = Paragraph::new(NO_EQUIPMENT_MESSAGE)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("our fleet"));
        frame.render_widget(empty, layout[1]);
    } else {
        let header = Row::new(["S.No.", "Equipment Name", "Capacity"].map(|label| {
            Cell::from(label).style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
        }));
        let rows = equipment_rows(&items)
            .into_iter()
            .enumerate()
            .map(|(index, cells)| {
                let mut style = if index % 2 == 0 {
                    Style::default()
                } else {
                    Style::default().fg(Color::Gray)
                };
                if index == view_data.cursors.equipment_row {
                    style = Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD);
                }
                Row::new(cells.map(Cell::from)).style(style)
            });
        let widths = [
            Constraint::Length(6),
            Constraint::Min(24),
            Constraint::Length(12),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(1)
            .block(
                Block::default()
                    .title(format!(
                        "our fleet ({} of {})",
                        items.len(),
                        view_data.content.catalog.len()
                    ))
                    .borders(Borders::ALL),
            );
        frame.render_widget(table, layout[1]);
    }

    let detail_text = items
        .get(view_data.cursors.equipment_row)
        .map(|item| render_equipment_detail_text(item))
        .unwrap_or_default();
    let detail = Paragraph::new(detail_text)
        .wrap(Wrap { trim: false })
        .block(Block::default().title("features").borders(Borders::ALL));
    frame.render_widget(detail, layout[2]);
}

fn equipment_rows(items: &[&CatalogItem]) -> Vec<[String; 3]> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            [
                (index + 1).to_string(),
                item.name.clone(),
                item.capacity_label(),
            ]
        })
        .collect()
}

fn render_equipment_detail_text(item: &CatalogItem) -> String {
    let mut lines = vec![format!(
        "{}  ·  {}  ·  {}",
        item.name,
        item.capacity_label(),
        item.category.label()
    )];
    lines.extend(item.features.iter().map(|feature| format!("  • {feature}")));
    if let Some(image) = &item.image {
        lines.push(format!("  image: {image}"));
    }
    lines.join("\n")
}

fn filter_bar_text(state: &AppState, content: &SiteContent) -> String {
    let categories = CategoryFilter::<EquipmentCategory>::options()
        .into_iter()
        .map(|option| mark_selected(option.label(), option == state.equipment_filter.category))
        .collect::<Vec<_>>()
        .join("  ");
    let capacities = content
        .capacity_filters
        .iter()
        .map(|filter| mark_selected(filter.label(), *filter == state.equipment_filter.capacity))
        .collect::<Vec<_>>()
        .join("  ");
    let stats = content
        .fleet_stats
        .iter()
        .map(|stat| format!("{} {}", stat.value, stat.label))
        .collect::<Vec<_>>()
        .join("  |  ");
    format!("category (c): {categories}\ncapacity (t): {capacities}\n{stats}")
}

fn mark_selected(label: &str, selected: bool) -> String {
    if selected {
        format!("[{label}]")
    } else {
        label.to_owned()
    }
}

fn render_home_text(content: &SiteContent, cursors: Cursors) -> String {
    let about = &content.about;
    let mut lines = vec![
        about.tagline.to_uppercase(),
        String::new(),
        about.hero_title.clone(),
        about.hero_subtitle.clone(),
        String::new(),
        "CORE SERVICES".to_owned(),
    ];
    lines.extend(
        content
            .services
            .iter()
            .map(|service| format!("  • {}", service.title)),
    );

    lines.push(String::new());
    lines.push("ADVANCED EQUIPMENT".to_owned());
    for item in content.featured_catalog_items() {
        let highlights = item
            .features
            .iter()
            .take(3)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!(
            "  • {} ({}) - {highlights}",
            item.name,
            item.capacity_label()
        ));
    }

    lines.push(String::new());
    lines.push("FEATURED PROJECTS (j/k, enter for details)".to_owned());
    for (index, project) in content.featured_projects.iter().enumerate() {
        let marker = if index == cursors.featured_project {
            ">"
        } else {
            " "
        };
        lines.push(format!(
            "{marker} {} · {} · {}",
            project.title, project.location, project.client
        ));
    }

    lines.push(String::new());
    lines.push(format!("TRUSTED BY: {}", content.clients.join(", ")));
    lines.join("\n")
}

fn render_about_text(content: &SiteContent) -> String {
    let about = &content.about;
    let mut lines = vec![
        "WHY CHOOSE ALTECH?".to_owned(),
        String::new(),
        about.body.clone(),
        String::new(),
    ];
    lines.extend(
        about
            .strengths
            .iter()
            .map(|strength| format!("  ✓ {strength}")),
    );
    lines.push(String::new());
    lines.push(format!("{} Years of Excellence", about.years_of_excellence));
    lines.join("\n")
}

fn render_services_text(content: &SiteContent) -> String {
    content
        .services
        .iter()
        .map(|service| format!("{}\n  {}", service.title.to_uppercase(), service.description))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_gallery_text(state: &AppState, view_data: &ViewData) -> String {
    let categories = CategoryFilter::<GalleryCategory>::options()
        .into_iter()
        .map(|option| mark_selected(option.label(), option == state.gallery_category))
        .collect::<Vec<_>>()
        .join("  ");
    let mut lines = vec![format!("category (c): {categories}"), String::new()];

    let projects = filter_projects(&view_data.content.gallery, state.gallery_category);
    if projects.is_empty() {
        lines.push(NO_PROJECTS_MESSAGE.to_owned());
        return lines.join("\n");
    }

    for (index, project) in projects.iter().enumerate() {
        let selected = index == view_data.cursors.gallery_project;
        let marker = if selected { ">" } else { " " };
        lines.push(format!(
            "{marker} [{}] {}",
            project.category.label(),
            project.title
        ));
        let cursor = selected.then_some(view_data.cursors.gallery_image);
        lines.push(format!("    {}", thumbnail_strip(project.images.len(), cursor)));
    }
    lines.join("\n")
}

fn thumbnail_strip(count: usize, active: Option<usize>) -> String {
    (0..count)
        .map(|index| {
            if Some(index) == active {
                format!("{THUMB_ACTIVE_OPEN}{}{THUMB_ACTIVE_CLOSE}", index + 1)
            } else {
                format!(" {} ", index + 1)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_lightbox_overlay_text(lightbox: &LightboxState, content: &SiteContent) -> Option<String> {
    let project = content.gallery_project(lightbox.project_id()?)?;
    let image = lightbox.current_image(project)?;
    let counter = lightbox.counter_label()?;
    let mut lines = vec![
        format!("{}  {counter}", project.title),
        String::new(),
        image.to_owned(),
        String::new(),
        thumbnail_strip(project.images.len(), lightbox.image_index()),
    ];
    if project.images.len() > 1 {
        lines.push(String::new());
        lines.push("←/h prev  →/l next  1-9 jump  esc close".to_owned());
    } else {
        lines.push(String::new());
        lines.push("esc close".to_owned());
    }
    Some(lines.join("\n"))
}

fn render_project_detail_text(project: &FeaturedProject) -> String {
    let mut meta = vec![
        format!("location: {}", project.location),
        format!("client: {}", project.client),
        format!("category: {}", project.category),
    ];
    if let Some(tonnage) = &project.tonnage {
        meta.push(format!("tonnage: {tonnage}"));
    }
    if let Some(duration) = &project.duration {
        meta.push(format!("duration: {duration}"));
    }

    let mut lines = meta;
    lines.push(String::new());
    lines.push(project.description.clone());
    if !project.highlights.is_empty() {
        lines.push(String::new());
        lines.push("PROJECT HIGHLIGHTS".to_owned());
        lines.extend(
            project
                .highlights
                .iter()
                .map(|highlight| format!("  ✓ {highlight}")),
        );
    }
    lines.join("\n")
}

fn help_overlay_text() -> &'static str {
    "tab / shift+tab   next / previous page\n\
     1-5               jump to page\n\
     r                 reload content\n\
     ?                 toggle help\n\
     q / ctrl+c        quit\n\
     \n\
     home:       j/k select project, enter details\n\
     equipment:  c/C category, t/T capacity, x reset, j/k move\n\
     gallery:    c/C category, j/k project, h/l image, enter open\n\
     lightbox:   h/l or arrows prev/next, 1-9 jump, esc close"
}

fn status_text(state: &AppState, view_data: &ViewData) -> String {
    let hint = match state.active_page {
        PageKind::Home => "j/k enter",
        PageKind::Equipment => "c/C t/T x j/k",
        PageKind::Gallery if state.lightbox.is_open() => "h/l 1-9 esc",
        PageKind::Gallery => "c/C j/k h/l enter",
        PageKind::About | PageKind::Services => "",
    };
    let footer = format!(
        "© {} {}",
        view_data.footer_year, view_data.content.about.company
    );
    let keys = format!("tab 1-5 r ? q {hint}");
    match &state.status_line {
        Some(status) => format!("{status} | {} | {footer}", keys.trim_end()),
        None => format!("{} | {footer}", keys.trim_end()),
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
