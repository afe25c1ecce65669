//! Catalog pages

use maud::{html, Markup};

use super::layout;
use crate::models::book::BookListing;

pub fn books(books: &[BookListing]) -> Markup {
    layout(
        "Books",
        html! {
            @if books.is_empty() {
                p { "No books in the catalog yet." }
            } @else {
                table {
                    thead {
                        tr {
                            th { "ID" }
                            th { "Title" }
                            th { "Author" }
                            th { "Type" }
                            th { "Status" }
                        }
                    }
                    tbody {
                        @for book in books {
                            tr {
                                td { (book.id) }
                                td { (book.title) }
                                td { (book.author) }
                                td { (book.book_type) }
                                td {
                                    @if book.available { "Available" } @else { "Borrowed" }
                                }
                            }
                        }
                    }
                }
            }
            p { a href="/add_book" { "Add a book" } }
        },
    )
}

pub fn add_book_form() -> Markup {
    layout(
        "Add book",
        html! {
            form method="post" action="/add_book" {
                label { "Title " input type="text" name="title" required; }
                label { "Author " input type="text" name="author" required; }
                label { "Type " input type="text" name="type" required; }
                button type="submit" { "Add book" }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_labels() {
        let listing = vec![
            BookListing {
                id: 1,
                title: "Holes".into(),
                author: "Louis Sachar".into(),
                book_type: "Novel".into(),
                available: true,
            },
            BookListing {
                id: 2,
                title: "Dune".into(),
                author: "Frank Herbert".into(),
                book_type: "Novel".into(),
                available: false,
            },
        ];

        let page = books(&listing).into_string();
        assert!(page.contains("<td>Available</td>"));
        assert!(page.contains("<td>Borrowed</td>"));
        assert!(page.find("Holes") < page.find("Dune"));
    }
}
