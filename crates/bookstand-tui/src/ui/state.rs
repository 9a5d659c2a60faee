//! Per-view state for the three screens.

use bookstand_core::{Book, BookDraft};

/// Lifecycle of the collection read behind the books view.
///
/// A mount starts at `Loading` and settles on `Loaded` or `Failed`. Both
/// are terminal for that mount: the only way back to `Loading` is leaving
/// the view and entering it again.
#[derive(Debug, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Book>),
    Failed(String),
}

#[derive(Debug, Default)]
pub struct BooksViewState {
    pub load: LoadState,
    pub selected: usize,
}

impl BooksViewState {
    pub fn loading() -> Self {
        Self {
            load: LoadState::Loading,
            selected: 0,
        }
    }

    pub fn books(&self) -> &[Book] {
        match &self.load {
            LoadState::Loaded(books) => books,
            _ => &[],
        }
    }

    pub fn selected_book(&self) -> Option<&Book> {
        self.books().get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.books().len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.books().len().saturating_sub(1);
    }

    /// Keep the cursor on a valid row after the list shrinks.
    pub fn clamp_selection(&mut self) {
        let len = self.books().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

#[derive(Debug, Default)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
    /// Shown until the next submit attempt, like the page it replaces.
    pub error: Option<String>,
}

impl LoginState {
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }

    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        self.field_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.field_mut().pop();
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Author,
    Category,
    Price,
}

/// Edit forms fetch the record before the fields become editable.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PrefillState {
    #[default]
    Ready,
    Loading,
    Failed(String),
}

#[derive(Debug)]
pub struct BookFormState {
    pub mode: FormMode,
    pub focus: FormField,
    pub title: String,
    pub author: String,
    pub category: String,
    pub price: String,
    pub error: Option<String>,
    pub prefill: PrefillState,
    pub submitting: bool,
}

impl BookFormState {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            focus: FormField::default(),
            title: String::new(),
            author: String::new(),
            category: String::new(),
            price: String::new(),
            error: None,
            prefill: PrefillState::Ready,
            submitting: false,
        }
    }

    pub fn edit(id: i64) -> Self {
        Self {
            mode: FormMode::Edit { id },
            prefill: PrefillState::Loading,
            ..Self::create()
        }
    }

    pub fn prefill_pending(&self) -> bool {
        self.prefill == PrefillState::Loading
    }

    /// Fill the fields from a fetched record.
    pub fn load_book(&mut self, book: &Book) {
        self.title = book.title.clone();
        self.author = book.author.clone();
        self.category = book.category.clone().unwrap_or_default();
        self.price = book
            .price
            .map(|price| format!("{price:.2}"))
            .unwrap_or_default();
        self.prefill = PrefillState::Ready;
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Author,
            FormField::Author => FormField::Category,
            FormField::Category => FormField::Price,
            FormField::Price => FormField::Title,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Price,
            FormField::Author => FormField::Title,
            FormField::Category => FormField::Author,
            FormField::Price => FormField::Category,
        };
    }

    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        self.field_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.field_mut().pop();
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Title => &mut self.title,
            FormField::Author => &mut self.author,
            FormField::Category => &mut self.category,
            FormField::Price => &mut self.price,
        }
    }

    /// Parse and validate the buffers into a submittable draft.
    pub fn draft(&self) -> Result<BookDraft, String> {
        let price = match self.price.trim() {
            "" => None,
            text => Some(
                text.parse::<f64>()
                    .map_err(|_| "Price must be a number".to_string())?,
            ),
        };
        let category = match self.category.trim() {
            "" => None,
            text => Some(text.to_string()),
        };
        let draft = BookDraft {
            title: self.title.clone(),
            author: self.author.clone(),
            category,
            price,
        };
        draft.validate()?;
        Ok(draft)
    }
}
