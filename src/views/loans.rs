//! Borrowing pages

use maud::{html, Markup};

use super::{error_message, layout};
use crate::models::loan::BorrowedBook;

pub fn borrow_book_form(error: Option<&str>) -> Markup {
    layout(
        "Borrow book",
        html! {
            (error_message(error))
            form method="post" action="/borrow_book" {
                label { "Name " input type="text" name="name" required; }
                label { "Grade " input type="number" name="grade" required; }
                label { "Book ID " input type="number" name="book_id" required; }
                button type="submit" { "Borrow" }
            }
        },
    )
}

pub fn borrowed_books(loans: &[BorrowedBook]) -> Markup {
    layout(
        "Borrowed books",
        html! {
            table {
                thead {
                    tr {
                        th { "Borrower ID" }
                        th { "Title" }
                        th { "Author" }
                        th { "Borrower" }
                        th { "Borrowed on" }
                        th { "Return by" }
                    }
                }
                tbody {
                    @for loan in loans {
                        tr {
                            td { (loan.borrower_id) }
                            td { (loan.title) }
                            td { (loan.author) }
                            td { (loan.borrower_name) }
                            td { (loan.borrow_date.format("%Y-%m-%d")) }
                            td { (loan.return_date.format("%Y-%m-%d")) }
                        }
                    }
                }
            }
        },
    )
}

pub fn return_book_form(error: Option<&str>) -> Markup {
    layout(
        "Return book",
        html! {
            (error_message(error))
            form method="post" action="/return_book" {
                label { "Borrower ID " input type="number" name="borrower_id" required; }
                button type="submit" { "Return" }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_form_without_error_has_no_message() {
        let page = borrow_book_form(None).into_string();
        assert!(!page.contains("class=\"error\""));
    }

    #[test]
    fn test_form_shows_error() {
        let page = return_book_form(Some("Invalid Borrower ID. Please enter a valid Borrower ID.")).into_string();
        assert!(page.contains("Invalid Borrower ID. Please enter a valid Borrower ID."));
    }

    #[test]
    fn test_dates_are_iso_formatted() {
        let loans = vec![BorrowedBook {
            borrower_id: 3,
            title: "Holes".into(),
            author: "Louis Sachar".into(),
            borrower_name: "Ana Ruiz".into(),
            borrow_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            return_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        }];

        let page = borrowed_books(&loans).into_string();
        assert!(page.contains("2024-01-01"));
        assert!(page.contains("2024-01-15"));
    }
}
