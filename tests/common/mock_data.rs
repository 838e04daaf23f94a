//! Mock data builders for creating test tickets and users.
//!
//! This module provides builder patterns for creating test data without
//! needing a live endpoint.

use plank::remote::BoardData;
use plank::types::{Priority, Ticket, User};

/// Builder for creating test tickets
pub struct TicketBuilder {
    ticket: Ticket,
}

impl TicketBuilder {
    /// Create a new ticket builder with the given ID
    pub fn new(id: &str) -> Self {
        Self {
            ticket: Ticket {
                id: id.to_string(),
                title: String::new(),
                tag: vec![],
                priority: Priority::Medium,
                user_id: "usr-1".to_string(),
                status: "Todo".to_string(),
            },
        }
    }

    /// Set the ticket title
    pub fn title(mut self, title: &str) -> Self {
        self.ticket.title = title.to_string();
        self
    }

    /// Set the ticket status
    pub fn status(mut self, status: &str) -> Self {
        self.ticket.status = status.to_string();
        self
    }

    /// Set the ticket priority
    pub fn priority(mut self, p: Priority) -> Self {
        self.ticket.priority = p;
        self
    }

    /// Set the assigned user
    pub fn user(mut self, user_id: &str) -> Self {
        self.ticket.user_id = user_id.to_string();
        self
    }

    /// Add a tag
    pub fn tag(mut self, tag: &str) -> Self {
        self.ticket.tag.push(tag.to_string());
        self
    }

    /// Build the ticket
    pub fn build(self) -> Ticket {
        self.ticket
    }
}

/// Users matching the hosted payload
pub fn mock_users() -> Vec<User> {
    vec![
        User {
            id: "usr-1".to_string(),
            name: "Anoop Sharma".to_string(),
        },
        User {
            id: "usr-2".to_string(),
            name: "Yogesh".to_string(),
        },
        User {
            id: "usr-3".to_string(),
            name: "Shankar Kumar".to_string(),
        },
    ]
}

/// A small board: three statuses, three users, mixed priorities
pub fn mock_board_data() -> BoardData {
    BoardData {
        tickets: vec![
            TicketBuilder::new("CAM-1")
                .title("Update user profile page UI")
                .status("Todo")
                .priority(Priority::Urgent)
                .user("usr-1")
                .tag("Feature Request")
                .build(),
            TicketBuilder::new("CAM-2")
                .title("Add multi-language support")
                .status("In progress")
                .priority(Priority::Low)
                .user("usr-2")
                .tag("Feature Request")
                .build(),
            TicketBuilder::new("CAM-3")
                .title("Optimize database queries")
                .status("Todo")
                .priority(Priority::Medium)
                .user("usr-3")
                .tag("Feature Request")
                .build(),
            TicketBuilder::new("CAM-4")
                .title("Implement email notification system")
                .status("Backlog")
                .priority(Priority::NoPriority)
                .user("usr-1")
                .tag("Feature Request")
                .build(),
            TicketBuilder::new("CAM-5")
                .title("Enhance search functionality")
                .status("Todo")
                .priority(Priority::High)
                .user("usr-2")
                .tag("Feature Request")
                .build(),
        ],
        users: mock_users(),
    }
}
