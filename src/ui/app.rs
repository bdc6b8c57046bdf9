use crate::model::BookId;
use crate::ui::detail::{DetailIntent, DetailReducer, DetailState};
use crate::ui::form::{FormIntent, FormReducer, FormState, Submission};
use crate::ui::input::Command;
use crate::ui::list::{ListIntent, ListReducer, ListViewState};
use crate::ui::mvi::Reducer;
use crate::ui::route::Route;
use crate::ui::worker::{ApiCommand, ApiOutcome, ApiRequest, ApiResponse, CommandSender};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Navigation shell: owns the active route and the state of its screen.
///
/// Every navigation bumps `activation`. Requests carry the activation they
/// were issued under and responses tagged with an older one are dropped, so
/// a slow fetch can never overwrite the screen the user moved to.
pub struct App {
    should_quit: bool,
    route: Route,
    activation: u64,
    tick: u8,
    commands: CommandSender,
    /// List screen state (MVI pattern).
    list: ListViewState,
    /// Create/edit form state (MVI pattern).
    form: FormState,
    /// Detail screen state (MVI pattern).
    detail: DetailState,
}

impl App {
    pub fn new(commands: CommandSender) -> Self {
        Self {
            should_quit: false,
            route: Route::List,
            activation: 0,
            tick: 0,
            commands,
            list: ListViewState::default(),
            form: FormState::default(),
            detail: DetailState::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn activation(&self) -> u64 {
        self.activation
    }

    pub fn tick(&self) -> u8 {
        self.tick
    }

    pub fn list_state(&self) -> &ListViewState {
        &self.list
    }

    pub fn form_state(&self) -> &FormState {
        &self.form
    }

    pub fn detail_state(&self) -> &DetailState {
        &self.detail
    }

    /// True while the active screen waits on the store.
    pub fn is_busy(&self) -> bool {
        match self.route {
            Route::List => {
                self.list.is_loading()
                    || self
                        .list
                        .snapshot()
                        .is_some_and(|snapshot| snapshot.deleting.is_some())
            }
            Route::Create | Route::Edit(_) => {
                matches!(self.form, FormState::Loading) || self.form.is_submitting()
            }
            Route::Detail(_) => matches!(self.detail, DetailState::Loading),
        }
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Activate `route` with fresh state and issue its fetch.
    pub fn navigate(&mut self, route: Route) {
        self.activation += 1;
        tracing::info!(route = %route, activation = self.activation, "Navigating");

        self.list = ListViewState::default();
        self.form = FormState::default();
        self.detail = DetailState::default();

        match &route {
            Route::List => self.send(ApiRequest::List),
            Route::Create => self.form = FormState::create(),
            Route::Detail(id) | Route::Edit(id) => self.send(ApiRequest::Get { id: id.clone() }),
        }
        self.route = route;
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::Quit => self.request_quit(),
            Command::Navigate(route) => self.navigate(route),
            Command::Reload => self.navigate(self.route.clone()),
            Command::List(intent) => self.dispatch_list(intent),
            Command::Form(intent) => self.dispatch_form(intent),
        }
    }

    pub fn dispatch_list(&mut self, intent: ListIntent) {
        let before = self.deleting();
        dispatch_mvi!(self, list, ListReducer, intent);
        let after = self.deleting();
        if let Some(id) = after {
            if before.as_ref() != Some(&id) {
                self.send(ApiRequest::Delete { id });
            }
        }
    }

    pub fn dispatch_form(&mut self, intent: FormIntent) {
        let was_submitting = self.form.is_submitting();
        dispatch_mvi!(self, form, FormReducer, intent);
        if was_submitting {
            return;
        }
        match self.form.submission() {
            Some(Submission::Create(book)) => self.send(ApiRequest::Create { book }),
            Some(Submission::Update(book)) => {
                let id = book.id.clone();
                self.send(ApiRequest::Update { id, book });
            }
            None => {}
        }
    }

    pub fn dispatch_detail(&mut self, intent: DetailIntent) {
        dispatch_mvi!(self, detail, DetailReducer, intent);
    }

    pub fn on_api_response(&mut self, response: ApiResponse) {
        if response.activation != self.activation {
            tracing::debug!(
                response = response.activation,
                current = self.activation,
                "Dropping stale API response"
            );
            return;
        }

        match response.outcome {
            ApiOutcome::Listed(result) => match result {
                Ok(books) => {
                    tracing::debug!(count = books.len(), "Collection loaded");
                    self.dispatch_list(ListIntent::Loaded { books });
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Collection fetch failed");
                    self.dispatch_list(ListIntent::LoadFailed {
                        message: err.user_message().to_string(),
                    });
                }
            },
            ApiOutcome::Fetched(result) => {
                let editing = matches!(self.route, Route::Edit(_));
                if !editing && !matches!(self.route, Route::Detail(_)) {
                    tracing::debug!(route = %self.route, "Ignoring record for a screen without one");
                    return;
                }
                match result {
                    Ok(book) if editing => self.dispatch_form(FormIntent::Loaded { book }),
                    Ok(book) => self.dispatch_detail(DetailIntent::Loaded { book }),
                    Err(err) => {
                        tracing::warn!(error = %err, "Record fetch failed");
                        let message = err.user_message().to_string();
                        if editing {
                            self.dispatch_form(FormIntent::LoadFailed { message });
                        } else {
                            self.dispatch_detail(DetailIntent::LoadFailed { message });
                        }
                    }
                }
            }
            ApiOutcome::Created(result) | ApiOutcome::Updated(result) => match result {
                Ok(book) => {
                    tracing::info!(id = %book.id, "Record saved");
                    self.navigate(Route::List);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Save failed");
                    self.dispatch_form(FormIntent::SubmitFailed {
                        message: err.user_message().to_string(),
                    });
                }
            },
            ApiOutcome::Deleted { id, result } => match result {
                Ok(()) => {
                    tracing::info!(id = %id, "Record deleted");
                    self.dispatch_list(ListIntent::Deleted { id });
                }
                Err(err) => {
                    tracing::warn!(id = %id, error = %err, "Delete failed");
                    self.dispatch_list(ListIntent::DeleteFailed {
                        id,
                        message: err.user_message().to_string(),
                    });
                }
            },
        }
    }

    fn deleting(&self) -> Option<BookId> {
        self.list
            .snapshot()
            .and_then(|snapshot| snapshot.deleting.clone())
    }

    fn send(&self, request: ApiRequest) {
        let command = ApiCommand {
            activation: self.activation,
            request,
        };
        if let Err(err) = self.commands.send(command) {
            tracing::error!(request = ?err.0.request, "API worker is gone");
        }
    }
}
