use std::borrow::Cow;
use std::time::{SystemTime, UNIX_EPOCH};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use navbar::{
    meeting_count, Activation, AuthStatus, Event, IdentityProvider, LayoutMode, LocalSession,
    Navbar, NavbarView, RequestState,
};
use ratatui::{
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::fixtures::LoadResult;
use crate::keys::ModifierState;
use crate::ui::nav::{slot_entry, NavState, Slot};
use crate::ui::theme::Theme;
use crate::ui::viewport::TerminalViewport;
use crate::ui::widgets::{
    bar_items, slot_areas, DropdownWidget, NavbarBarWidget, Notice, NoticeWidget,
    OverflowMenuWidget, BAR_HEIGHT,
};

const HOME_PAGE: &str = "/";

/// Auth status as seen by the navbar while the session request is in
/// flight. A failed request counts as signed out.
pub fn auth_status(session: &RequestState<LocalSession>) -> Cow<'_, AuthStatus> {
    match session {
        RequestState::Success(session) => Cow::Borrowed(session.status()),
        RequestState::Failure(_) => Cow::Owned(AuthStatus::Unauthenticated),
        RequestState::Idle | RequestState::Loading => Cow::Owned(AuthStatus::Loading),
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

pub struct App {
    pub navbar: Navbar,
    pub session: RequestState<LocalSession>,
    pub events: RequestState<Vec<Event>>,
    pub viewport: TerminalViewport,
    pub nav: NavState,
    pub keys: ModifierState,
    pub notice: Option<Notice>,
    /// Path of the page the last navigation landed on.
    pub page: String,
    pub should_quit: bool,
    pub theme: Theme,
}

impl App {
    pub fn new(navbar: Navbar, viewport: TerminalViewport, theme: Theme) -> Self {
        Self {
            navbar,
            session: RequestState::Idle,
            events: RequestState::Idle,
            viewport,
            nav: NavState::default(),
            keys: ModifierState::default(),
            notice: None,
            page: HOME_PAGE.to_string(),
            should_quit: false,
            theme,
        }
    }

    /// Mark both fixture requests as in flight.
    pub fn start_loading(&mut self) {
        self.session.start();
        self.events.start();
    }

    pub fn auth_status(&self) -> Cow<'_, AuthStatus> {
        auth_status(&self.session)
    }

    pub fn view(&self) -> NavbarView<'_> {
        self.navbar
            .view_for(&auth_status(&self.session), &self.viewport)
    }

    pub fn on_load(&mut self, result: LoadResult) {
        match result {
            LoadResult::Session(result) => {
                if let Err(e) = &result {
                    self.notice = Some(Notice::error(format!("Could not load session: {}", e)));
                }
                self.session.finish(result);
            }
            LoadResult::Events(result) => {
                if let Err(e) = &result {
                    self.notice = Some(Notice::error(format!("Could not load events: {}", e)));
                }
                self.events.finish(result);
            }
        }
        self.sync_nav();
    }

    pub fn resize(&mut self, columns: u16) {
        self.viewport.columns = columns;
        tracing::debug!(columns, width_px = self.viewport.width_px(), "Viewport resized");
        self.sync_nav();
    }

    fn sync_nav(&mut self) {
        let auth = auth_status(&self.session);
        let view = self.navbar.view_for(&auth, &self.viewport);
        self.nav.sync(&view);
    }

    /// Upcoming meetings for the signed-in user as of `now` (unix seconds).
    pub fn meeting_count_at(&self, now: u64) -> usize {
        let auth = self.auth_status();
        match (auth.user(), self.events.data()) {
            (Some(user), Some(events)) => meeting_count(events, &user.username, now),
            _ => 0,
        }
    }

    pub fn meeting_count(&self) -> usize {
        self.meeting_count_at(unix_now())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.keys.track(&key);
        if key.kind == KeyEventKind::Release {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.notice.is_some() && key.code == KeyCode::Esc {
            self.notice = None;
            return;
        }

        if key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        let activation = {
            let auth = auth_status(&self.session);
            let view = self.navbar.view_for(&auth, &self.viewport);
            self.nav.handle_key(&view, key.code, self.keys.shift_held)
        };

        if let Some(activation) = activation {
            self.apply(activation);
        }
    }

    /// Perform the side effect an activation asks for.
    pub fn apply(&mut self, activation: Activation) {
        match activation {
            Activation::Navigate(path) => {
                tracing::info!(path = %path, "Navigate");
                self.page = path;
                self.nav.reset();
            }
            Activation::OpenExternal(url) => {
                tracing::info!(url = %url, "Open external link");
                self.notice = Some(Notice::info(format!("Opening {} in a new tab", url)));
                self.nav.reset();
            }
            Activation::SignOut => {
                if let RequestState::Success(session) = &mut self.session {
                    session.sign_out();
                }
                self.events.reset();
                self.page = HOME_PAGE.to_string();
                self.nav = NavState::default();
            }
            Activation::Toggled { .. } | Activation::Dropdown { .. } => {}
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let [bar_area, body_area] =
            Layout::vertical([Constraint::Length(BAR_HEIGHT), Constraint::Min(0)]).areas(area);

        let view = self.view();
        let meetings = self.meeting_count();
        let items = bar_items(&view, &self.nav.inline, meetings);
        let focused = self.nav.focused_slot(&view);

        frame.render_widget(
            NavbarBarWidget {
                items: &items,
                focused,
                theme: &self.theme,
            },
            bar_area,
        );

        frame.render_widget(self.page_body(&view), body_area);

        let bar_inner = Block::default().borders(Borders::ALL).inner(bar_area);
        let anchors = slot_areas(&items, bar_inner);
        let anchor_x = |slot: Slot| {
            anchors
                .iter()
                .find(|(s, _)| *s == slot)
                .map(|(_, rect)| rect.x)
                .unwrap_or(bar_inner.x)
        };

        if self.nav.overflow.open {
            frame.render_widget(
                OverflowMenuWidget {
                    entries: view.overflow(),
                    menu: &self.nav.overflow,
                    x: anchor_x(Slot::More),
                    top: bar_area.bottom(),
                    meeting_count: meetings,
                    theme: &self.theme,
                },
                area,
            );
        } else if let Some(slot) = focused {
            if let Some(entry) = slot_entry(&view, slot) {
                let state = self.nav.inline.dropdown(&entry.label);
                if state.open {
                    frame.render_widget(
                        DropdownWidget {
                            entry: &entry,
                            state,
                            x: anchor_x(slot),
                            top: bar_area.bottom(),
                            theme: &self.theme,
                        },
                        area,
                    );
                }
            }
        }

        if let Some(notice) = &self.notice {
            frame.render_widget(
                NoticeWidget {
                    notice,
                    theme: &self.theme,
                },
                area,
            );
        }
    }

    fn page_body(&self, view: &NavbarView<'_>) -> Paragraph<'static> {
        let theme = &self.theme;
        let label = |text: &str| Span::styled(text.to_string(), Style::default().fg(theme.muted));

        let auth = match self.auth_status().as_ref() {
            AuthStatus::Loading => "loading".to_string(),
            AuthStatus::Unauthenticated => "signed out".to_string(),
            AuthStatus::Authenticated(user) => format!("signed in as {}", user.username),
        };
        let layout = match view.layout() {
            LayoutMode::Large => "large",
            LayoutMode::ExtraSmall => "extra small",
        };
        let mut lines = vec![
            Line::from(vec![
                label("Page      "),
                Span::styled(
                    self.page.clone(),
                    Style::default()
                        .fg(theme.text_primary)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                label("Viewport  "),
                Span::raw(format!("{}px, {} layout", self.viewport.width_px(), layout)),
            ]),
            Line::from(vec![label("Session   "), Span::raw(auth)]),
        ];
        if let NavbarView::Full(partition) = view {
            lines.push(Line::from(vec![
                label("Hidden    "),
                Span::raw(partition.hidden_count.to_string()),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " ←→: Focus  Enter: Open  ↑↓: Move  Esc: Close  q: Quit",
            Style::default().fg(theme.muted),
        )));

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.muted)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navbar::{AvailabilityStatus, Participant, User};

    fn member() -> User {
        User {
            username: "jesse".to_string(),
            display_name: "Jesse".to_string(),
            dojo_cohort: "1400-1500".to_string(),
        }
    }

    fn app(width: u32) -> App {
        App::new(
            Navbar::default(),
            TerminalViewport::fixed(width),
            Theme::dark(),
        )
    }

    #[test]
    fn test_auth_status_follows_request() {
        let mut session = RequestState::Idle;
        assert_eq!(*auth_status(&session), AuthStatus::Loading);
        session.start();
        assert_eq!(*auth_status(&session), AuthStatus::Loading);
        session.fail("boom");
        assert_eq!(*auth_status(&session), AuthStatus::Unauthenticated);
    }

    #[test]
    fn test_failed_load_raises_notice() {
        let mut app = app(1600);
        app.start_loading();
        app.on_load(LoadResult::Events(Err(crate::fixtures::FixtureError::Read {
            path: "events.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        })));
        assert!(app.notice.is_some());
        assert!(app.events.error().is_some());

        app.handle_key(KeyEvent::from(KeyCode::Esc));
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_sign_out_resets_navigation() {
        let mut app = app(1600);
        app.on_load(LoadResult::Session(Ok(LocalSession::signed_in(member()))));
        app.page = "/games".to_string();
        app.apply(Activation::SignOut);
        assert_eq!(*app.auth_status(), AuthStatus::Unauthenticated);
        assert_eq!(app.page, HOME_PAGE);
    }

    #[test]
    fn test_meeting_count_needs_user_and_events() {
        let mut app = app(1600);
        let events = vec![Event {
            id: "e1".to_string(),
            owner: "jesse".to_string(),
            participants: vec![Participant {
                username: "sam".to_string(),
            }],
            status: AvailabilityStatus::Booked,
            end_time: 2_000,
        }];
        app.on_load(LoadResult::Events(Ok(events)));
        assert_eq!(app.meeting_count_at(1_000), 0);

        app.on_load(LoadResult::Session(Ok(LocalSession::signed_in(member()))));
        assert_eq!(app.meeting_count_at(1_000), 1);
        assert_eq!(app.meeting_count_at(3_000), 0);
    }

    #[test]
    fn test_external_link_shows_notice() {
        let mut app = app(1600);
        app.apply(Activation::OpenExternal("https://example.com".to_string()));
        assert!(app
            .notice
            .as_ref()
            .is_some_and(|n| n.message.contains("https://example.com")));
    }
}
