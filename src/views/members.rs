//! Member pages

use maud::{html, Markup};

use super::layout;
use crate::models::member::Member;

pub fn members(members: &[Member]) -> Markup {
    layout(
        "Members",
        html! {
            table {
                thead {
                    tr {
                        th { "ID" }
                        th { "Name" }
                        th { "Grade" }
                    }
                }
                tbody {
                    @for member in members {
                        tr {
                            td { (member.id) }
                            td { (member.name) }
                            td { (member.grade) }
                        }
                    }
                }
            }
            p { a href="/add_member" { "Register a member" } }
        },
    )
}

pub fn add_member_form() -> Markup {
    layout(
        "Add member",
        html! {
            form method="post" action="/add_member" {
                label { "Name " input type="text" name="name" required; }
                label { "Grade " input type="text" name="grade" required; }
                button type="submit" { "Add member" }
            }
        },
    )
}
