use crate::api::models::{Category, Place};
use crate::app::hit::Target;
use crate::app::router::Route;
use crate::app::state::{App, CategoryLayout, Focus, GRID_COLUMNS};
use crate::util::fit_width;
use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

const CARD_WIDTH: u16 = 16;
const CARD_HEIGHT: u16 = 4;
const ROW_HEIGHT: u16 = 3;
const AVATAR_WIDTH: u16 = 11;
const GALLERY_WIDTH: u16 = 4;
const BACK_WIDTH: u16 = 8;
const ACCENT: Color = Color::Rgb(0, 122, 255);
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Draws the screen for the current route and rebuilds the click map.
pub fn draw(frame: &mut Frame, app: &mut App) {
    app.hits.clear();
    match app.route() {
        Route::Dashboard => draw_dashboard(frame, app),
        Route::CategoryDetail(id) => draw_category_detail(frame, app, id),
        Route::PlaceDetail(id) => draw_place_detail(frame, app, id),
        Route::PhotoGallery(id) => draw_gallery(frame, app, id),
        Route::Contact => draw_contact(frame, app),
        Route::Search => {
            draw_dashboard(frame, app);
            // Nothing underneath the modal is clickable.
            app.hits.clear();
            draw_search_modal(frame, app);
        }
    }
}

/// Draws the dashboard: search bar, categories, places and status bar.
pub fn draw_dashboard(frame: &mut Frame, app: &mut App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                         // Search bar
            Constraint::Length(1),                         // Categories header
            Constraint::Length(category_region_height(app, frame.area().height)),
            Constraint::Length(1),                         // Places header
            Constraint::Min(1),                            // Places
            Constraint::Length(1),                         // Status bar
        ])
        .split(frame.area());

    draw_search_bar(frame, app, layout[0]);
    draw_categories_header(frame, app, layout[1]);
    draw_category_region(frame, app, layout[2]);

    let title = Paragraph::new(Line::from(Span::styled(
        "Places nearby",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, layout[3]);

    draw_place_list(frame, app, layout[4]);
    draw_status_bar(frame, app, layout[5]);
}

/// Dashboard rows outside the category region, counting one place row.
const DASHBOARD_CHROME: u16 = 3 + 1 + 1 + ROW_HEIGHT + 1;

fn category_region_height(app: &App, screen_height: u16) -> u16 {
    if app.loading() {
        return 1;
    }
    match app.layout {
        CategoryLayout::Collapsed => CARD_HEIGHT,
        CategoryLayout::Expanded => {
            let rows = app.categories.items().len().div_ceil(GRID_COLUMNS).max(1);
            let fit = usize::from((screen_height.saturating_sub(DASHBOARD_CHROME) / CARD_HEIGHT).max(1));
            rows.min(fit) as u16 * CARD_HEIGHT
        }
    }
}

fn draw_search_bar(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    let line = Line::from(vec![
        Span::styled("⌕ ", Style::default().fg(Color::Gray)),
        Span::styled("Search", Style::default().fg(Color::Gray)),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);
    app.hits.register(area, Target::SearchBar);

    // Help sits inside the search bar and takes the click before it does.
    if inner.width > 3 {
        let help = Rect::new(inner.right() - 3, inner.y, 3, 1);
        frame.render_widget(
            Paragraph::new(Span::styled("(?)", Style::default().fg(ACCENT))),
            help,
        );
        app.hits.register(help, Target::Help);
    }
}

fn draw_categories_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let label = app.show_all_label();
    let title_style = if app.focus == Focus::Categories {
        Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    frame.render_widget(Paragraph::new(Span::styled("Categories", title_style)), area);

    let w = label.chars().count() as u16;
    if area.width > w {
        let toggle = Rect::new(area.right() - w, area.y, w, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(label, Style::default().fg(ACCENT))),
            toggle,
        );
        app.hits.register(toggle, Target::ShowAllToggle);
    }
}

fn draw_category_region(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.loading() {
        let frame_idx = app.spinner_frame % SPINNER.len();
        let spinner = Line::from(vec![
            Span::styled(SPINNER[frame_idx], Style::default().fg(ACCENT)),
            Span::styled(" Loading", Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(spinner).alignment(Alignment::Center), area);
        return;
    }

    match app.layout {
        CategoryLayout::Collapsed => draw_category_strip(frame, app, area),
        CategoryLayout::Expanded => draw_category_grid(frame, app, area),
    }
}

/// Single row of cards, scrolled sideways so the selection stays visible.
fn draw_category_strip(frame: &mut Frame, app: &mut App, area: Rect) {
    let slot = CARD_WIDTH + 1;
    let visible = usize::from((area.width / slot).max(1));
    let selected = app.selected_category_index().unwrap_or(0);
    let offset = if selected >= visible { selected + 1 - visible } else { 0 };

    let cards: Vec<(Rect, u64)> = app
        .categories
        .items()
        .iter()
        .skip(offset)
        .take(visible)
        .enumerate()
        .map(|(i, c)| {
            let x = area.x + i as u16 * slot;
            let w = CARD_WIDTH.min(area.right().saturating_sub(x));
            (Rect::new(x, area.y, w, CARD_HEIGHT.min(area.height)), c.id)
        })
        .collect();

    for (rect, id) in cards {
        draw_category_card(frame, app, rect, id);
    }
}

/// Three equal columns; rows wrap downwards and scroll so the selected row stays visible.
fn draw_category_grid(frame: &mut Frame, app: &mut App, area: Rect) {
    let col_width = area.width / GRID_COLUMNS as u16;
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
    let selected_row = app.selected_category_index().unwrap_or(0) / GRID_COLUMNS;
    let first_row = if selected_row >= visible_rows { selected_row + 1 - visible_rows } else { 0 };

    let cards: Vec<(Rect, u64)> = app
        .categories
        .items()
        .iter()
        .skip(first_row * GRID_COLUMNS)
        .take(visible_rows * GRID_COLUMNS)
        .enumerate()
        .map(|(i, c)| {
            // i < visible_rows * 3, so the row fits in u16
            let row = (i / GRID_COLUMNS) as u16;
            let col = (i % GRID_COLUMNS) as u16;
            let y = area.y.saturating_add(row.saturating_mul(CARD_HEIGHT));
            let h = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
            let rect = Rect::new(area.x + col * col_width, y, col_width.saturating_sub(1), h);
            (rect, c.id)
        })
        .collect();

    for (rect, id) in cards {
        draw_category_card(frame, app, rect, id);
    }

    let hidden_below = app
        .categories
        .items()
        .len()
        .saturating_sub((first_row + visible_rows) * GRID_COLUMNS);
    if hidden_below > 0 && area.width > 12 {
        let more = format!("↓ {hidden_below} more");
        let w = (more.chars().count() as u16).min(area.width);
        let marker = Rect::new(area.right() - w, area.bottom().saturating_sub(1), w, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(more, Style::default().fg(Color::DarkGray))),
            marker,
        );
    }
}

fn draw_category_card(frame: &mut Frame, app: &mut App, area: Rect, id: u64) {
    let Some(category) = app.categories.get(id) else {
        return;
    };
    let selected = app.focus == Focus::Categories && app.selected_category == Some(id);
    let border = if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default().borders(Borders::ALL).border_style(border);
    let lines = category_card_lines(category, area.width.saturating_sub(2) as usize);
    let card = Paragraph::new(lines).block(block).alignment(Alignment::Center);
    frame.render_widget(card, area);
    app.hits.register(area, Target::CategoryCard(id));
}

/// Card body: an icon line only when the category has one, then the name.
pub fn category_card_lines(category: &Category, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(2);
    if category.icon.is_some() {
        lines.push(Line::from(Span::styled("▣", Style::default().fg(ACCENT))));
    }
    lines.push(Line::from(Span::styled(
        fit_width(&category.name, width),
        Style::default().fg(Color::White),
    )));
    lines
}

fn draw_place_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let visible = usize::from((area.height / ROW_HEIGHT).max(1));
    let selected = app.selected_place_index().unwrap_or(0);
    let offset = if selected >= visible { selected + 1 - visible } else { 0 };

    let rows: Vec<(Rect, u64)> = app
        .places
        .items()
        .iter()
        .skip(offset)
        .take(visible)
        .enumerate()
        .map(|(i, p)| {
            let y = area.y + i as u16 * ROW_HEIGHT;
            (Rect::new(area.x, y, area.width, ROW_HEIGHT.min(area.bottom() - y)), p.id)
        })
        .collect();

    for (rect, id) in rows {
        draw_place_row(frame, app, rect, id);
    }
}

fn draw_place_row(frame: &mut Frame, app: &mut App, area: Rect, id: u64) {
    let Some(place) = app.places.get(id) else {
        return;
    };
    let selected = app.focus == Focus::Places && app.selected_place == Some(id);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(AVATAR_WIDTH),
            Constraint::Min(1),
            Constraint::Length(GALLERY_WIDTH),
        ])
        .split(area);

    let avatar = match place.avatar_photo {
        Some(_) => Span::styled("  ▣", Style::default().fg(ACCENT)),
        None => Span::styled("No Avatar", Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(Paragraph::new(Line::from(avatar)), cols[0]);

    let mut info = Paragraph::new(place_info_lines(place));
    if selected {
        info = info.style(Style::default().add_modifier(Modifier::REVERSED));
    }
    frame.render_widget(info, cols[1]);

    let icon_area = Rect::new(cols[2].x, cols[2].y + cols[2].height.min(2) / 2, cols[2].width, 1);
    frame.render_widget(
        Paragraph::new(Span::styled("[▤]", Style::default().fg(ACCENT))),
        icon_area,
    );

    app.hits.register(area, Target::PlaceRow(id));
    app.hits.register(icon_area, Target::PlaceGallery(id));
}

/// Name, address and phone lines of a place row.
pub fn place_info_lines(place: &Place) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            place.name.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(place.address.clone(), Style::default().fg(Color::Gray))),
        Line::from(Span::styled(place.phone_display(), Style::default().fg(Color::Gray))),
    ]
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.route() {
        Route::Dashboard => "Tab focus • ↑/↓/←/→ move • Enter open • g photos • a show all • / search • ? help • r reload • Esc quit",
        Route::Search => "Type to filter • ↑/↓ move • Enter open • Esc close",
        Route::PlaceDetail(_) => "g photos • Esc back",
        _ => "Esc back",
    };
    let status_line = Line::from(vec![
        Span::styled(app.status.clone(), Style::default().fg(Color::Gray)),
        Span::raw("   "),
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
        Span::raw("   |  "),
        Span::styled(app.route().path(), Style::default().fg(Color::Yellow)),
    ]);
    frame.render_widget(Paragraph::new(status_line).wrap(Wrap { trim: true }), area);
}

fn screen_layout(frame: &Frame) -> (Rect, Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());
    (layout[0], layout[1])
}

/// Clickable back link followed by the status bar.
fn draw_screen_footer(frame: &mut Frame, app: &mut App, area: Rect) {
    let [back, rest] = Layout::horizontal([Constraint::Length(BACK_WIDTH), Constraint::Min(1)]).areas(area);
    let link = Rect::new(back.x, back.y, BACK_WIDTH.min(back.width).saturating_sub(1), back.height);
    frame.render_widget(
        Paragraph::new(Span::styled("◂ Back", Style::default().fg(ACCENT))),
        link,
    );
    app.hits.register(link, Target::Back);
    draw_status_bar(frame, app, rest);
}

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<10}"), Style::default().fg(Color::DarkGray)),
        Span::raw(value),
    ])
}

fn draw_category_detail(frame: &mut Frame, app: &mut App, id: u64) {
    let (body, status) = screen_layout(frame);
    let lines = match app.categories.get(id) {
        Some(c) => vec![
            field("Name", c.name.clone()),
            field("Id", c.id.to_string()),
            field("Icon", c.icon.clone().unwrap_or_else(|| "none".into())),
        ],
        None => vec![Line::from(format!("Category {id} is not loaded"))],
    };
    let block = Block::default().title("Category").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), body);
    draw_screen_footer(frame, app, status);
}

fn draw_place_detail(frame: &mut Frame, app: &mut App, id: u64) {
    let (body, status) = screen_layout(frame);
    let lines = match app.places.get(id) {
        Some(p) => vec![
            field("Name", p.name.clone()),
            field("Address", p.address.clone()),
            field("Phone", p.phone_display()),
            field(
                "Avatar",
                p.avatar_photo.clone().unwrap_or_else(|| "No Avatar".into()),
            ),
        ],
        None => vec![Line::from(format!("Place {id} is not loaded"))],
    };
    let block = Block::default().title("Place").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), body);
    draw_screen_footer(frame, app, status);
}

fn draw_gallery(frame: &mut Frame, app: &mut App, id: u64) {
    let (body, status) = screen_layout(frame);
    let (title, lines) = match app.places.get(id) {
        Some(p) => (
            format!("Photos: {}", p.name),
            match &p.avatar_photo {
                Some(uri) => vec![field("Photo", uri.clone())],
                None => vec![Line::from(Span::styled(
                    "No photos",
                    Style::default().fg(Color::DarkGray),
                ))],
            },
        ),
        None => ("Photos".to_string(), vec![Line::from(format!("Place {id} is not loaded"))]),
    };
    let block = Block::default().title(title).borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), body);
    draw_screen_footer(frame, app, status);
}

fn draw_contact(frame: &mut Frame, app: &mut App) {
    let (body, status) = screen_layout(frame);
    let lines = vec![
        Line::from(Span::styled("Need help?", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from("Missing a place or found wrong details? Get in touch with the team"),
        Line::from("running the places service and include the place name and address."),
    ];
    let block = Block::default().title("Contact").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), body);
    draw_screen_footer(frame, app, status);
}

fn draw_search_modal(frame: &mut Frame, app: &mut App) {
    let popup = centered_rect(70, 60, frame.area());
    frame.render_widget(Clear, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(popup);

    let input_line = if app.search.input.is_empty() {
        Line::from(Span::styled("Type to search…", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(Span::raw(app.search.input.as_str()))
    };
    let input_block = Block::default().title("Search").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(input_line).block(input_block.clone()), chunks[0]);

    let inner = input_block.inner(chunks[0]);
    let x = inner.x.saturating_add(app.search.input.chars().count() as u16);
    frame.set_cursor_position((x.min(inner.right().saturating_sub(1)), inner.y));

    let items: Vec<ListItem> = app
        .search
        .results
        .iter()
        .filter_map(|id| app.places.get(*id))
        .map(|p| {
            ListItem::new(Line::from(vec![
                Span::styled(p.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(p.address.clone(), Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    if !app.search.results.is_empty() {
        list_state.select(Some(app.search.selected_index));
    }

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!("Places ({} results)", app.search.results.len()))
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
        .highlight_symbol("▸ ");
    frame.render_stateful_widget(list, chunks[1], &mut list_state);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal =
        Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
    let [v_area] = vertical.areas(area);
    let [h_area] = horizontal.areas(v_area);
    h_area
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::ApiError;
    use crate::api::models::Phone;
    use crate::app::loader::LoadEvent;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn cafe() -> Place {
        Place {
            id: 1,
            name: "Cafe".into(),
            address: "Main St".into(),
            phone: Phone::Number(5551234),
            avatar_photo: None,
            phone_numbers: None,
        }
    }

    fn screen_text(buf: &Buffer) -> String {
        buf.content
            .chunks(buf.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        screen_text(terminal.backend().buffer())
    }

    fn find_target(app: &App, target: Target) -> Option<(u16, u16)> {
        (0..30u16)
            .flat_map(|y| (0..80u16).map(move |x| (x, y)))
            .find(|&(x, y)| app.hits.target_at(x, y) == Some(target))
    }

    fn loaded(categories: Result<Vec<Category>, ApiError>, places: Vec<Place>) -> App {
        let mut app = App::new();
        let g = app.generation();
        app.apply(LoadEvent::Categories { generation: g, result: categories });
        app.apply(LoadEvent::Places { generation: g, result: Ok(places) });
        app
    }

    #[test]
    fn spinner_shows_only_while_loading() {
        let mut app = App::new();
        assert!(render(&mut app).contains("Loading"));

        let mut app = loaded(Ok(vec![]), vec![]);
        assert!(!render(&mut app).contains("Loading"));
    }

    #[test]
    fn empty_categories_and_one_place() {
        let mut app = loaded(Ok(vec![]), vec![cafe()]);
        let text = render(&mut app);

        assert!(text.contains("Cafe"));
        assert!(text.contains("Main St"));
        assert!(text.contains("5551234"));
        assert!(text.contains("No Avatar"));
        assert!(find_target(&app, Target::CategoryCard(1)).is_none());

        let (x, y) = find_target(&app, Target::PlaceRow(1)).unwrap();
        app.click(x, y);
        assert_eq!(app.route().path(), "/items/1");
    }

    #[test]
    fn failed_categories_still_render_places() {
        let mut app = loaded(Err(ApiError::Status(502)), vec![cafe()]);
        let text = render(&mut app);
        assert!(!app.loading());
        assert!(text.contains("Cafe"));
    }

    #[test]
    fn gallery_icon_click_opens_photos_only() {
        let mut app = loaded(Ok(vec![]), vec![cafe()]);
        render(&mut app);
        let (x, y) = find_target(&app, Target::PlaceGallery(1)).unwrap();
        app.click(x, y);
        assert_eq!(app.history.pushed(), &[Route::PhotoGallery(1)]);
    }

    #[test]
    fn card_without_icon_has_only_name() {
        let c = Category { id: 1, name: "Food".into(), icon: None };
        assert_eq!(category_card_lines(&c, 14).len(), 1);

        let c = Category { icon: Some("http://x/icon.png".into()), ..c };
        assert_eq!(category_card_lines(&c, 14).len(), 2);
    }

    #[test]
    fn expanded_grid_wraps_into_three_columns() {
        let cats: Vec<Category> = (1..=4)
            .map(|i| Category { id: i, name: format!("Cat{i}"), icon: None })
            .collect();
        let mut app = loaded(Ok(cats), vec![]);
        app.toggle_show_all();
        let text = render(&mut app);
        assert!(text.contains("Show less"));

        let (x1, y1) = find_target(&app, Target::CategoryCard(1)).unwrap();
        let (_, y3) = find_target(&app, Target::CategoryCard(3)).unwrap();
        let (x4, y4) = find_target(&app, Target::CategoryCard(4)).unwrap();
        assert_eq!(y1, y3);
        assert_eq!(x1, x4);
        assert_eq!(y4, y1 + CARD_HEIGHT);
    }

    #[test]
    fn expanded_grid_taller_than_screen_keeps_every_card_reachable() {
        let cats: Vec<Category> = (1..=30)
            .map(|i| Category { id: i, name: format!("Cat{i}"), icon: None })
            .collect();
        let mut app = loaded(Ok(cats), vec![cafe()]);
        app.toggle_show_all();
        app.focus = Focus::Categories;

        for id in 1..=30u64 {
            app.selected_category = Some(id);
            render(&mut app);
            assert!(
                find_target(&app, Target::CategoryCard(id)).is_some(),
                "category {id} not drawn while selected"
            );
            // The place list stays on screen below the grid.
            assert!(find_target(&app, Target::PlaceRow(1)).is_some());
        }
    }

    #[test]
    fn grid_follows_keyboard_selection_down() {
        let cats: Vec<Category> = (1..=30)
            .map(|i| Category { id: i, name: format!("Cat{i}"), icon: None })
            .collect();
        let mut app = loaded(Ok(cats), vec![]);
        app.toggle_show_all();
        app.focus = Focus::Categories;

        let text = render(&mut app);
        assert!(text.contains("more"));
        assert!(find_target(&app, Target::CategoryCard(30)).is_none());

        for _ in 0..9 {
            app.move_selection(1, true);
        }
        assert_eq!(app.selected_category, Some(28));
        render(&mut app);
        assert!(find_target(&app, Target::CategoryCard(28)).is_some());
        assert!(find_target(&app, Target::CategoryCard(30)).is_some());
        assert!(find_target(&app, Target::CategoryCard(1)).is_none());
    }

    #[test]
    fn back_link_returns_from_detail_screen() {
        let mut app = loaded(Ok(vec![]), vec![cafe()]);
        app.activate(Target::PlaceRow(1));
        let text = render(&mut app);
        assert!(text.contains("Back"));

        let (x, y) = find_target(&app, Target::Back).unwrap();
        app.click(x, y);
        assert_eq!(app.route(), Route::Dashboard);
    }

    #[test]
    fn help_inside_search_bar_opens_contact() {
        let mut app = loaded(Ok(vec![]), vec![]);
        render(&mut app);
        let (x, y) = find_target(&app, Target::Help).unwrap();
        app.click(x, y);
        assert_eq!(app.history.pushed(), &[Route::Contact]);
    }
}
