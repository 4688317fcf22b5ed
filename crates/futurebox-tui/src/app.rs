//! Application state.
//!
//! `App` owns everything the views render and every guard the actions
//! check. Input handling and task results mutate the state and may
//! return an [`Effect`] — a description of async work for the runner to
//! spawn — so the whole state machine stays synchronous and testable.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use futurebox_core::config::Config;
use futurebox_core::content::Submission;
use futurebox_core::rank::rank_by_votes;
use futurebox_core::selection::SelectionSet;
use futurebox_core::types::{Capsule, ObjectId, SuiAddress};
use futurebox_sui::tx::{build_deposit, build_submit, build_vote, TransactionRequest};
use futurebox_sui::wallet::ExecuteResponse;

use crate::notify::Toasts;

/// Capsules shown per grid page.
pub const PAGE_SIZE: usize = 8;

/// Top-level pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Browse and select capsules.
    Capsules,
    /// Vote leaderboard.
    Leaderboard,
    /// The connected account's FutureBox NFTs.
    Gallery,
    /// Capsule submission form.
    Submit,
}

impl Page {
    /// Tab order.
    pub const ALL: [Page; 4] = [
        Self::Capsules,
        Self::Leaderboard,
        Self::Gallery,
        Self::Submit,
    ];

    /// Tab label.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Capsules => "Capsules",
            Self::Leaderboard => "Leaderboard",
            Self::Gallery => "My NFTs",
            Self::Submit => "Submit",
        }
    }
}

/// Async work requested by a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Re-fetch the capsule registry.
    FetchCapsules {
        /// Generation token; stale results are discarded.
        generation: u64,
    },
    /// Re-fetch the connected account's NFTs.
    FetchNfts {
        /// Generation token; stale results are discarded.
        generation: u64,
    },
    /// Sign and execute a capsule submission.
    SubmitTx(TransactionRequest),
    /// Sign and execute a batch vote (deadline-guarded).
    VoteTx(TransactionRequest),
    /// Sign and execute a single NFT deposit.
    DepositTx(TransactionRequest),
}

/// Which write flow a finished transaction belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxKind {
    /// Capsule creation.
    Submit,
    /// Batch vote over the selection.
    Vote,
    /// Single NFT deposit.
    Deposit,
}

/// Results delivered back from spawned tasks.
#[derive(Debug)]
pub enum AppMsg {
    /// Capsule fetch finished.
    Capsules {
        /// Generation the fetch was started with.
        generation: u64,
        /// The fetched list, or a user-facing error.
        result: Result<Vec<Capsule>, String>,
    },
    /// NFT fetch finished.
    Nfts {
        /// Generation the fetch was started with.
        generation: u64,
        /// The fetched list, or a user-facing error.
        result: Result<Vec<Capsule>, String>,
    },
    /// A write flow finished.
    TxDone {
        /// Which flow.
        kind: TxKind,
        /// Execution outcome, or a user-facing error.
        result: Result<ExecuteResponse, String>,
    },
}

/// Submission form field focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Text,
    Image,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            Self::Title => Self::Text,
            Self::Text => Self::Image,
            Self::Image => Self::Title,
        }
    }
}

/// The submission form's contents.
#[derive(Debug, Default)]
pub struct SubmitForm {
    pub title: String,
    pub text: String,
    pub image: String,
    pub focus: Option<FormField>,
}

impl SubmitForm {
    fn focused_field(&mut self) -> Option<&mut String> {
        match self.focus? {
            FormField::Title => Some(&mut self.title),
            FormField::Text => Some(&mut self.text),
            FormField::Image => Some(&mut self.image),
        }
    }

    fn clear(&mut self) {
        self.title.clear();
        self.text.clear();
        self.image.clear();
    }
}

/// The whole application state.
pub struct App {
    /// Contract configuration.
    pub config: Config,
    /// Connected account, if any.
    pub account: Option<SuiAddress>,
    /// Active page.
    pub page: Page,

    /// Fetched capsule list (registry order).
    pub capsules: Vec<Capsule>,
    /// Error banner for the capsule views.
    pub capsules_error: Option<String>,
    /// Whether a capsule fetch is in flight.
    pub capsules_loading: bool,

    /// Fetched NFT list.
    pub nfts: Vec<Capsule>,
    /// Error banner for the gallery.
    pub nfts_error: Option<String>,
    /// Whether an NFT fetch is in flight.
    pub nfts_loading: bool,

    /// Batch-vote selection.
    pub selection: SelectionSet,
    /// 1-based grid page.
    pub grid_page: usize,
    /// Cursor within the visible grid slice.
    pub cursor: usize,
    /// Cursor within the gallery list.
    pub gallery_cursor: usize,
    /// Detail overlay target.
    pub modal: Option<Capsule>,
    /// Submission form.
    pub form: SubmitForm,
    /// Live notifications.
    pub toasts: Toasts,

    /// A vote or deposit is awaiting the wallet.
    pub depositing: bool,
    /// A submission is awaiting the wallet.
    pub submitting: bool,
    /// Exit flag.
    pub should_quit: bool,

    capsules_generation: u64,
    nfts_generation: u64,
}

impl App {
    /// Fresh state on the capsules page.
    pub fn new(config: Config, account: Option<SuiAddress>) -> Self {
        Self {
            config,
            account,
            page: Page::Capsules,
            capsules: Vec::new(),
            capsules_error: None,
            capsules_loading: false,
            nfts: Vec::new(),
            nfts_error: None,
            nfts_loading: false,
            selection: SelectionSet::new(),
            grid_page: 1,
            cursor: 0,
            gallery_cursor: 0,
            modal: None,
            form: SubmitForm::default(),
            toasts: Toasts::new(),
            depositing: false,
            submitting: false,
            should_quit: false,
            capsules_generation: 0,
            nfts_generation: 0,
        }
    }

    // ---- fetch lifecycle ----

    /// Start (or restart) the capsule fetch, invalidating older ones.
    pub fn refetch_capsules(&mut self) -> Effect {
        self.capsules_generation += 1;
        self.capsules_loading = true;
        self.capsules_error = None;
        Effect::FetchCapsules {
            generation: self.capsules_generation,
        }
    }

    /// Start (or restart) the NFT fetch, invalidating older ones.
    ///
    /// Refuses (error banner, no effect) when no account is connected.
    pub fn refetch_nfts(&mut self) -> Option<Effect> {
        if self.account.is_none() {
            self.nfts_error = Some("No account connected".to_string());
            self.nfts_loading = false;
            return None;
        }
        self.nfts_generation += 1;
        self.nfts_loading = true;
        self.nfts_error = None;
        Some(Effect::FetchNfts {
            generation: self.nfts_generation,
        })
    }

    /// Switch pages; data-bearing pages fetch on mount.
    pub fn open_page(&mut self, page: Page) -> Option<Effect> {
        self.page = page;
        self.cursor = 0;
        self.modal = None;
        self.form.focus = if page == Page::Submit {
            Some(FormField::Title)
        } else {
            None
        };
        match page {
            Page::Capsules | Page::Leaderboard => Some(self.refetch_capsules()),
            Page::Gallery => {
                self.gallery_cursor = 0;
                self.refetch_nfts()
            }
            Page::Submit => None,
        }
    }

    /// Apply a task result; may chain a refetch.
    pub fn apply(&mut self, msg: AppMsg) -> Option<Effect> {
        match msg {
            AppMsg::Capsules { generation, result } => {
                if generation != self.capsules_generation {
                    debug!(generation, current = self.capsules_generation, "stale capsule fetch discarded");
                    return None;
                }
                self.capsules_loading = false;
                match result {
                    Ok(capsules) => {
                        self.capsules = capsules;
                        self.clamp_grid();
                    }
                    Err(message) => {
                        self.capsules_error = Some(message);
                        self.toasts
                            .error("Failed to load capsules. Please try again later.");
                    }
                }
                None
            }
            AppMsg::Nfts { generation, result } => {
                if generation != self.nfts_generation {
                    debug!(generation, current = self.nfts_generation, "stale NFT fetch discarded");
                    return None;
                }
                self.nfts_loading = false;
                match result {
                    Ok(nfts) => {
                        self.nfts = nfts;
                        self.gallery_cursor = self
                            .gallery_cursor
                            .min(self.nfts.len().saturating_sub(1));
                    }
                    Err(message) => {
                        self.nfts_error = Some(message);
                    }
                }
                None
            }
            AppMsg::TxDone { kind, result } => self.finish_tx(kind, result),
        }
    }

    fn finish_tx(
        &mut self,
        kind: TxKind,
        result: Result<ExecuteResponse, String>,
    ) -> Option<Effect> {
        match kind {
            TxKind::Submit => {
                self.submitting = false;
                match result {
                    Ok(response) => {
                        self.toasts.success(format!("Capsule submitted ({})", response.digest));
                        self.form.clear();
                        Some(self.refetch_capsules())
                    }
                    Err(message) => {
                        self.toasts.error(message);
                        None
                    }
                }
            }
            TxKind::Vote => {
                self.depositing = false;
                match result {
                    Ok(_) => {
                        self.toasts.success("Capsules deposited successfully");
                        self.selection.clear();
                        Some(self.refetch_capsules())
                    }
                    Err(message) => {
                        self.toasts.error(message);
                        None
                    }
                }
            }
            TxKind::Deposit => {
                self.depositing = false;
                match result {
                    Ok(_) => {
                        self.toasts.success("NFT deposited successfully");
                        self.refetch_nfts()
                    }
                    Err(message) => {
                        self.toasts.error(message);
                        None
                    }
                }
            }
        }
    }

    // ---- capsule grid ----

    /// Capsules ranked for the leaderboard view.
    pub fn leaderboard(&self) -> Vec<Capsule> {
        rank_by_votes(self.capsules.clone())
    }

    /// Number of grid pages (at least 1).
    pub fn total_pages(&self) -> usize {
        self.capsules.len().div_ceil(PAGE_SIZE).max(1)
    }

    /// The slice of capsules on the current grid page.
    pub fn current_cards(&self) -> &[Capsule] {
        let start = (self.grid_page - 1) * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(self.capsules.len());
        if start >= self.capsules.len() {
            return &[];
        }
        &self.capsules[start..end]
    }

    /// Go to the next grid page (clamped).
    pub fn next_grid_page(&mut self) {
        if self.grid_page < self.total_pages() {
            self.grid_page += 1;
            self.cursor = 0;
        }
    }

    /// Go to the previous grid page (clamped).
    pub fn prev_grid_page(&mut self) {
        if self.grid_page > 1 {
            self.grid_page -= 1;
            self.cursor = 0;
        }
    }

    fn clamp_grid(&mut self) {
        self.grid_page = self.grid_page.min(self.total_pages());
        self.cursor = self
            .cursor
            .min(self.current_cards().len().saturating_sub(1));
    }

    fn cursor_capsule(&self) -> Option<&Capsule> {
        self.current_cards().get(self.cursor)
    }

    // ---- actions ----

    /// Toggle selection membership, surfacing the five-capsule cap as a
    /// toast.
    pub fn toggle_selected(&mut self, id: &ObjectId) {
        if let Err(err) = self.selection.toggle(id) {
            self.toasts.error(err.to_string());
        }
    }

    /// Whether the batch-vote control is enabled: exactly five selected,
    /// an account connected, and no vote/deposit in flight.
    pub fn vote_enabled(&self) -> bool {
        self.selection.is_complete() && self.account.is_some() && !self.depositing
    }

    /// Begin the batch vote over the selection.
    pub fn begin_vote(&mut self) -> Option<Effect> {
        if self.account.is_none() {
            self.toasts.error("No account connected");
            return None;
        }
        if !self.selection.is_complete() {
            self.toasts
                .error("Please select exactly 5 capsules to deposit");
            return None;
        }
        if self.depositing {
            return None;
        }
        match build_vote(&self.config, &self.selection) {
            Ok(request) => {
                self.depositing = true;
                Some(Effect::VoteTx(request))
            }
            Err(err) => {
                self.toasts.error(err.to_string());
                None
            }
        }
    }

    /// Begin depositing the NFT under the gallery cursor.
    pub fn begin_deposit(&mut self) -> Option<Effect> {
        if self.account.is_none() {
            self.toasts.error("No account connected");
            return None;
        }
        if self.depositing {
            return None;
        }
        let nft = self.nfts.get(self.gallery_cursor)?;
        let request = build_deposit(&self.config, &nft.id);
        self.depositing = true;
        Some(Effect::DepositTx(request))
    }

    /// Validate the form and begin a capsule submission.
    ///
    /// A title without any content is rejected here; no transaction is
    /// built in that case.
    pub fn begin_submit(&mut self) -> Option<Effect> {
        if self.account.is_none() {
            self.toasts.error("No account connected");
            return None;
        }
        if self.submitting {
            return None;
        }
        match Submission::new(&self.form.title, &self.form.text, &self.form.image) {
            Ok(submission) => {
                self.submitting = true;
                Some(Effect::SubmitTx(build_submit(&self.config, &submission)))
            }
            Err(err) => {
                self.toasts.error(err.to_string());
                None
            }
        }
    }

    // ---- input ----

    /// Tick housekeeping.
    pub fn on_tick(&mut self) {
        self.toasts.prune();
    }

    /// Route a key press; may return async work to spawn.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Effect> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return None;
        }

        if self.modal.is_some() {
            return self.handle_modal_key(key);
        }

        match self.page {
            Page::Submit => self.handle_form_key(key),
            _ => self.handle_browse_key(key),
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) -> Option<Effect> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.modal = None;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(capsule) = self.modal.take() {
                    self.toggle_selected(&capsule.id);
                }
            }
            _ => {}
        }
        None
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> Option<Effect> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            KeyCode::Tab => {
                let index = Page::ALL.iter().position(|p| *p == self.page).unwrap_or(0);
                self.open_page(Page::ALL[(index + 1) % Page::ALL.len()])
            }
            KeyCode::BackTab => {
                let index = Page::ALL.iter().position(|p| *p == self.page).unwrap_or(0);
                self.open_page(Page::ALL[(index + Page::ALL.len() - 1) % Page::ALL.len()])
            }
            KeyCode::Char('1') => self.open_page(Page::Capsules),
            KeyCode::Char('2') => self.open_page(Page::Leaderboard),
            KeyCode::Char('3') => self.open_page(Page::Gallery),
            KeyCode::Char('4') => self.open_page(Page::Submit),
            KeyCode::Char('r') => match self.page {
                Page::Gallery => self.refetch_nfts(),
                _ => Some(self.refetch_capsules()),
            },
            KeyCode::Left if self.page == Page::Capsules => {
                self.prev_grid_page();
                None
            }
            KeyCode::Right if self.page == Page::Capsules => {
                self.next_grid_page();
                None
            }
            KeyCode::Up => {
                match self.page {
                    Page::Gallery => self.gallery_cursor = self.gallery_cursor.saturating_sub(1),
                    _ => self.cursor = self.cursor.saturating_sub(1),
                }
                None
            }
            KeyCode::Down => {
                match self.page {
                    Page::Gallery => {
                        self.gallery_cursor = (self.gallery_cursor + 1)
                            .min(self.nfts.len().saturating_sub(1));
                    }
                    _ => {
                        self.cursor = (self.cursor + 1)
                            .min(self.current_cards().len().saturating_sub(1));
                    }
                }
                None
            }
            KeyCode::Char(' ') if self.page == Page::Capsules => {
                if let Some(capsule) = self.cursor_capsule().cloned() {
                    self.toggle_selected(&capsule.id);
                }
                None
            }
            KeyCode::Enter if self.page == Page::Capsules => {
                self.modal = self.cursor_capsule().cloned();
                None
            }
            KeyCode::Char('v') if self.page == Page::Capsules => self.begin_vote(),
            KeyCode::Char('d') if self.page == Page::Gallery => self.begin_deposit(),
            _ => None,
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Option<Effect> {
        match key.code {
            // Tab is taken by field focus, so Esc is the way back out.
            KeyCode::Esc => self.open_page(Page::Capsules),
            KeyCode::Tab => {
                self.form.focus = Some(self.form.focus.map_or(FormField::Title, FormField::next));
                None
            }
            KeyCode::Enter => self.begin_submit(),
            KeyCode::Backspace => {
                if let Some(field) = self.form.focused_field() {
                    field.pop();
                }
                None
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.form.focused_field() {
                    field.push(c);
                }
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u8) -> ObjectId {
        format!("0x{n:x}").parse().unwrap()
    }

    fn capsule(n: u8) -> Capsule {
        let json = format!(
            r#"{{"id": {{"id": "0x{n:x}"}}, "name": "capsule-{n}", "votes_num": "{n}"}}"#
        );
        serde_json::from_str(&json).unwrap()
    }

    fn connected_app() -> App {
        App::new(Config::default(), Some("0xaa".parse().unwrap()))
    }

    fn app_with_capsules(count: u8) -> App {
        let mut app = connected_app();
        app.capsules = (1..=count).map(capsule).collect();
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn select_five(app: &mut App) {
        for n in 1..=5 {
            app.toggle_selected(&id(n));
        }
    }

    #[test]
    fn vote_enabled_requires_all_three_conditions() {
        let mut app = app_with_capsules(6);
        assert!(!app.vote_enabled());

        select_five(&mut app);
        assert!(app.vote_enabled());

        app.depositing = true;
        assert!(!app.vote_enabled());
        app.depositing = false;

        app.account = None;
        assert!(!app.vote_enabled());
    }

    #[test]
    fn sixth_selection_raises_toast_and_is_ignored() {
        let mut app = connected_app();
        select_five(&mut app);
        assert!(app.toasts.is_empty());

        app.toggle_selected(&id(6));
        assert_eq!(app.selection.len(), 5);
        assert!(!app.selection.contains(&id(6)));
        assert!(!app.toasts.is_empty());
    }

    #[test]
    fn begin_vote_without_account_issues_no_tx() {
        let mut app = App::new(Config::default(), None);
        select_five(&mut app);
        assert!(app.begin_vote().is_none());
        assert!(!app.depositing);
    }

    #[test]
    fn begin_vote_with_incomplete_selection_issues_no_tx() {
        let mut app = connected_app();
        app.toggle_selected(&id(1));
        assert!(app.begin_vote().is_none());
        assert!(!app.depositing);
    }

    #[test]
    fn begin_vote_marks_in_flight() {
        let mut app = connected_app();
        select_five(&mut app);
        let effect = app.begin_vote();
        assert!(matches!(effect, Some(Effect::VoteTx(_))));
        assert!(app.depositing);
        // A second attempt while in flight is a no-op.
        assert!(app.begin_vote().is_none());
    }

    #[test]
    fn vote_failure_reenables_and_keeps_selection() {
        let mut app = connected_app();
        select_five(&mut app);
        app.begin_vote();

        let chained = app.apply(AppMsg::TxDone {
            kind: TxKind::Vote,
            result: Err("transaction timed out".to_string()),
        });
        assert!(chained.is_none());
        assert!(!app.depositing);
        assert_eq!(app.selection.len(), 5);
        assert!(app.vote_enabled());
    }

    #[test]
    fn vote_success_clears_selection_and_refetches() {
        let mut app = connected_app();
        select_five(&mut app);
        app.begin_vote();

        let chained = app.apply(AppMsg::TxDone {
            kind: TxKind::Vote,
            result: Ok(ExecuteResponse {
                digest: "D1".to_string(),
            }),
        });
        assert!(matches!(chained, Some(Effect::FetchCapsules { .. })));
        assert!(app.selection.is_empty());
        assert!(!app.depositing);
    }

    #[test]
    fn title_only_submission_is_rejected_without_tx() {
        let mut app = connected_app();
        app.form.title = "just a title".to_string();
        assert!(app.begin_submit().is_none());
        assert!(!app.submitting);
        assert!(!app.toasts.is_empty());
    }

    #[test]
    fn valid_submission_builds_a_tx() {
        let mut app = connected_app();
        app.form.title = "t".to_string();
        app.form.text = "body".to_string();
        let effect = app.begin_submit();
        assert!(matches!(effect, Some(Effect::SubmitTx(_))));
        assert!(app.submitting);
    }

    #[test]
    fn submit_success_clears_the_form() {
        let mut app = connected_app();
        app.form.title = "t".to_string();
        app.form.text = "body".to_string();
        app.begin_submit();

        app.apply(AppMsg::TxDone {
            kind: TxKind::Submit,
            result: Ok(ExecuteResponse {
                digest: "D2".to_string(),
            }),
        });
        assert!(app.form.title.is_empty());
        assert!(app.form.text.is_empty());
        assert!(!app.submitting);
    }

    #[test]
    fn stale_capsule_fetch_is_discarded() {
        let mut app = connected_app();
        let first = app.refetch_capsules();
        let Effect::FetchCapsules { generation: stale } = first else {
            panic!("expected a capsule fetch");
        };
        // A newer fetch supersedes the first.
        app.refetch_capsules();

        app.apply(AppMsg::Capsules {
            generation: stale,
            result: Ok(vec![capsule(1)]),
        });
        assert!(app.capsules.is_empty());
        assert!(app.capsules_loading);
    }

    #[test]
    fn current_fetch_generation_is_applied() {
        let mut app = connected_app();
        let Effect::FetchCapsules { generation } = app.refetch_capsules() else {
            panic!("expected a capsule fetch");
        };
        app.apply(AppMsg::Capsules {
            generation,
            result: Ok(vec![capsule(1), capsule(2)]),
        });
        assert_eq!(app.capsules.len(), 2);
        assert!(!app.capsules_loading);
    }

    #[test]
    fn grid_pagination_slices_and_clamps() {
        let mut app = app_with_capsules(11);
        assert_eq!(app.total_pages(), 2);
        assert_eq!(app.current_cards().len(), PAGE_SIZE);

        app.prev_grid_page();
        assert_eq!(app.grid_page, 1);

        app.next_grid_page();
        assert_eq!(app.grid_page, 2);
        assert_eq!(app.current_cards().len(), 3);

        app.next_grid_page();
        assert_eq!(app.grid_page, 2);
    }

    #[test]
    fn empty_grid_has_one_page() {
        let app = connected_app();
        assert_eq!(app.total_pages(), 1);
        assert!(app.current_cards().is_empty());
    }

    #[test]
    fn shrinking_list_clamps_the_grid_page() {
        let mut app = app_with_capsules(20);
        app.grid_page = 3;
        let Effect::FetchCapsules { generation } = app.refetch_capsules() else {
            panic!("expected a capsule fetch");
        };
        app.apply(AppMsg::Capsules {
            generation,
            result: Ok(vec![capsule(1)]),
        });
        assert_eq!(app.grid_page, 1);
    }

    #[test]
    fn gallery_without_account_sets_error_banner() {
        let mut app = App::new(Config::default(), None);
        assert!(app.open_page(Page::Gallery).is_none());
        assert_eq!(app.nfts_error.as_deref(), Some("No account connected"));
    }

    #[test]
    fn opening_capsules_page_fetches() {
        let mut app = connected_app();
        assert!(matches!(
            app.open_page(Page::Leaderboard),
            Some(Effect::FetchCapsules { .. })
        ));
        assert!(app.capsules_loading);
    }

    #[test]
    fn modal_select_toggles_and_closes() {
        let mut app = app_with_capsules(3);
        app.handle_key(key(KeyCode::Enter));
        assert!(app.modal.is_some());

        app.handle_key(key(KeyCode::Enter));
        assert!(app.modal.is_none());
        assert_eq!(app.selection.len(), 1);
    }

    #[test]
    fn leaderboard_is_ranked() {
        let app = app_with_capsules(3);
        let ranked = app.leaderboard();
        assert_eq!(ranked[0].votes(), 3);
        assert_eq!(ranked[2].votes(), 1);
    }

    #[test]
    fn deposit_requires_an_nft_under_cursor() {
        let mut app = connected_app();
        assert!(app.begin_deposit().is_none());

        app.nfts = vec![capsule(7)];
        let effect = app.begin_deposit();
        assert!(matches!(effect, Some(Effect::DepositTx(_))));
        assert!(app.depositing);
    }

    #[test]
    fn form_keys_edit_the_focused_field() {
        let mut app = connected_app();
        app.open_page(Page::Submit);
        app.handle_key(key(KeyCode::Char('h')));
        app.handle_key(key(KeyCode::Char('i')));
        assert_eq!(app.form.title, "hi");

        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Char('x')));
        assert_eq!(app.form.text, "x");

        app.handle_key(key(KeyCode::Backspace));
        assert!(app.form.text.is_empty());
    }

    #[test]
    fn escape_leaves_the_form_for_the_grid() {
        let mut app = connected_app();
        app.open_page(Page::Submit);
        let effect = app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.page, Page::Capsules);
        assert!(matches!(effect, Some(Effect::FetchCapsules { .. })));
        assert!(!app.should_quit);
    }

    #[test]
    fn quit_keys_set_the_flag() {
        let mut app = connected_app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = connected_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
