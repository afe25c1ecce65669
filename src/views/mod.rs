//! Server-rendered HTML pages

pub mod books;
pub mod loans;
pub mod members;

use maud::{html, Markup, DOCTYPE};

/// Shared page chrome: title, navigation, content
pub fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) " - Library" }
            }
            body {
                nav {
                    a href="/" { "Home" } " | "
                    a href="/books" { "Books" } " | "
                    a href="/add_book" { "Add book" } " | "
                    a href="/members" { "Members" } " | "
                    a href="/add_member" { "Add member" } " | "
                    a href="/borrow_book" { "Borrow" } " | "
                    a href="/borrowed_books" { "Borrowed books" } " | "
                    a href="/return_book" { "Return" }
                }
                main {
                    h1 { (title) }
                    (content)
                }
            }
        }
    }
}

pub fn home(active_loans: i64) -> Markup {
    layout(
        "Library",
        html! {
            p { "Manage the catalog, register members and keep track of borrowed books." }
            p {
                (active_loans)
                @if active_loans == 1 { " book" } @else { " books" }
                " currently on loan."
            }
            ul {
                li { a href="/books" { "Browse books" } }
                li { a href="/members" { "Browse members" } }
                li { a href="/borrow_book" { "Borrow a book" } }
                li { a href="/return_book" { "Return a book" } }
            }
        },
    )
}

/// Inline message shown above a form that was rejected
pub(crate) fn error_message(message: Option<&str>) -> Markup {
    html! {
        @if let Some(message) = message {
            p class="error" { (message) }
        }
    }
}

/// Page shown for failures that are not reported on a form
pub fn error_page(message: &str) -> Markup {
    layout(
        "Something went wrong",
        html! {
            p class="error" { (message) }
            p { a href="/" { "Back to the home page" } }
        },
    )
}
