//! The hand-authored demo data set.

use super::DataSource;
use crate::entities::{
    ChatRoom, Client, Invoice, InvoiceStatus, KanbanTask, Project, ProjectStatus,
    ProjectStatusData, RevenueData, TaskPriority, TaskStatus, TeamMember, TeamMemberDetailed,
    TimelineEvent,
};
use chrono::NaiveDate;

/// Fixed in-memory data set. Every call returns a fresh copy of the same records.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockData;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn project(
    id: &str,
    name: &str,
    client: &str,
    status: ProjectStatus,
    progress: u8,
    deadline: NaiveDate,
    budget: u64,
) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
        client: client.to_string(),
        status,
        progress,
        deadline,
        budget,
    }
}

fn invoice(
    id: &str,
    project: &str,
    client: &str,
    amount: u64,
    status: InvoiceStatus,
    due_date: NaiveDate,
) -> Invoice {
    Invoice {
        id: id.to_string(),
        project: project.to_string(),
        client: client.to_string(),
        amount,
        status,
        due_date,
        contract_value: None,
    }
}

fn status_month(month: &str, active: u32, completed: u32, on_hold: u32) -> ProjectStatusData {
    ProjectStatusData {
        month: month.to_string(),
        active,
        completed,
        on_hold,
    }
}

fn revenue_month(month: &str, revenue: u64, expenses: u64) -> RevenueData {
    RevenueData {
        month: month.to_string(),
        revenue,
        expenses,
    }
}

fn task(id: u32, title: &str, status: TaskStatus, priority: TaskPriority, assignee: &str) -> KanbanTask {
    KanbanTask {
        id,
        title: title.to_string(),
        status,
        priority,
        assignee: assignee.to_string(),
    }
}

fn room(id: u32, name: &str, last_message: &str, time: &str, unread: u32) -> ChatRoom {
    ChatRoom {
        id,
        name: name.to_string(),
        last_message: last_message.to_string(),
        time: time.to_string(),
        unread,
    }
}

fn event(date: &str, title: &str, description: &str) -> TimelineEvent {
    TimelineEvent {
        date: date.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn member(
    id: u32,
    name: &str,
    role: &str,
    avatar: &str,
    email: &str,
    phone: &str,
    projects: u32,
    assigned: &[&str],
) -> TeamMemberDetailed {
    TeamMemberDetailed {
        id,
        name: name.to_string(),
        role: role.to_string(),
        avatar: avatar.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        projects,
        assigned_projects: strings(assigned),
    }
}

#[allow(clippy::too_many_arguments)]
fn client(
    id: u32,
    name: &str,
    industry: &str,
    contact_person: &str,
    email: &str,
    phone: &str,
    location: &str,
    active_projects: u32,
    total_value: u64,
    status: ProjectStatus,
    projects: &[&str],
) -> Client {
    Client {
        id,
        name: name.to_string(),
        industry: industry.to_string(),
        contact_person: contact_person.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        location: location.to_string(),
        active_projects,
        total_value,
        status,
        projects: strings(projects),
    }
}

// Table-shaped data reads better unwrapped.
#[rustfmt::skip]
impl DataSource for MockData {
    fn projects(&self) -> Vec<Project> {
        use ProjectStatus::{Active, Completed, OnHold, Review};
        vec![
            project("PRJ-001", "Skyline Tower", "Urban Dev Corp", Active, 72, date(2025, 6, 15), 4_500_000),
            project("PRJ-002", "Harbor Bridge Redesign", "City of Portland", Active, 45, date(2025, 9, 1), 8_200_000),
            project("PRJ-003", "Green Campus Hub", "State University", Review, 91, date(2025, 3, 20), 3_100_000),
            project("PRJ-004", "Metro Station Complex", "Transit Authority", Active, 33, date(2025, 12, 1), 12_000_000),
            project("PRJ-005", "Riverside Apartments", "Horizon Realty", Completed, 100, date(2025, 1, 15), 6_700_000),
            project("PRJ-006", "Innovation Lab", "TechForward Inc", OnHold, 18, date(2025, 11, 30), 2_200_000),
        ]
    }

    fn project_status_data(&self) -> Vec<ProjectStatusData> {
        vec![
            status_month("Sep", 4, 1, 1),
            status_month("Oct", 5, 2, 1),
            status_month("Nov", 6, 2, 2),
            status_month("Dec", 5, 3, 1),
            status_month("Jan", 4, 4, 1),
            status_month("Feb", 6, 5, 1),
        ]
    }

    fn clients(&self) -> Vec<Client> {
        use ProjectStatus::{Active, Completed, OnHold, Review};
        vec![
            client(1, "Urban Dev Corp", "Real Estate Development", "Michael Roberts", "mroberts@urbandev.com", "(555) 200-1001", "New York, NY", 1, 4_500_000, Active, &["Skyline Tower"]),
            client(2, "City of Portland", "Government", "Jennifer Walsh", "jwalsh@portland.gov", "(555) 200-1002", "Portland, OR", 1, 8_200_000, Active, &["Harbor Bridge Redesign"]),
            client(3, "State University", "Education", "Dr. Alan Foster", "afoster@stateuniv.edu", "(555) 200-1003", "Austin, TX", 1, 3_100_000, Review, &["Green Campus Hub"]),
            client(4, "Transit Authority", "Government / Transportation", "Karen Liu", "kliu@transitauth.gov", "(555) 200-1004", "Chicago, IL", 1, 12_000_000, Active, &["Metro Station Complex"]),
            client(5, "Horizon Realty", "Real Estate", "Steven Nash", "snash@horizonrealty.com", "(555) 200-1005", "Denver, CO", 0, 6_700_000, Completed, &["Riverside Apartments"]),
            client(6, "TechForward Inc", "Technology", "Diana Patel", "dpatel@techforward.com", "(555) 200-1006", "San Francisco, CA", 0, 2_200_000, OnHold, &["Innovation Lab"]),
        ]
    }

    fn invoices(&self) -> Vec<Invoice> {
        use InvoiceStatus::{Overdue, Paid, Pending};
        vec![
            invoice("INV-001", "Skyline Tower", "Urban Dev Corp", 450_000, Paid, date(2025, 2, 1)),
            invoice("INV-002", "Harbor Bridge Redesign", "City of Portland", 820_000, Pending, date(2025, 3, 15)),
            invoice("INV-003", "Green Campus Hub", "State University", 155_000, Overdue, date(2025, 1, 20)),
            invoice("INV-004", "Metro Station Complex", "Transit Authority", 1_200_000, Pending, date(2025, 4, 1)),
            invoice("INV-005", "Riverside Apartments", "Horizon Realty", 670_000, Paid, date(2025, 1, 10)),
        ]
    }

    fn revenue_data(&self) -> Vec<RevenueData> {
        vec![
            revenue_month("Sep", 1_200_000, 800_000),
            revenue_month("Oct", 1_450_000, 920_000),
            revenue_month("Nov", 1_100_000, 780_000),
            revenue_month("Dec", 1_650_000, 1_050_000),
            revenue_month("Jan", 1_380_000, 890_000),
            revenue_month("Feb", 1_520_000, 960_000),
        ]
    }

    fn team_members(&self) -> Vec<TeamMember> {
        // The summary list is the first five detailed members.
        self.team_members_detailed()
            .iter()
            .take(5)
            .map(TeamMemberDetailed::summary)
            .collect()
    }

    fn team_members_detailed(&self) -> Vec<TeamMemberDetailed> {
        vec![
            member(1, "Sarah Chen", "Lead Architect", "SC", "sarah.chen@structura.com", "(555) 101-2001", 3, &["Skyline Tower", "Harbor Bridge", "Green Campus"]),
            member(2, "James Wilson", "Structural Engineer", "JW", "james.wilson@structura.com", "(555) 101-2002", 2, &["Skyline Tower", "Metro Station"]),
            member(3, "Emily Davis", "Interior Designer", "ED", "emily.davis@structura.com", "(555) 101-2003", 4, &["Skyline Tower", "Riverside Apts", "Green Campus", "Innovation Lab"]),
            member(4, "David Park", "Project Manager", "DP", "david.park@structura.com", "(555) 101-2004", 5, &["Skyline Tower", "Harbor Bridge", "Metro Station", "Green Campus", "Riverside Apts"]),
            member(5, "Lisa Thompson", "MEP Engineer", "LT", "lisa.thompson@structura.com", "(555) 101-2005", 2, &["Metro Station", "Innovation Lab"]),
            member(6, "Robert Kim", "Civil Engineer", "RK", "robert.kim@structura.com", "(555) 101-2006", 3, &["Harbor Bridge", "Metro Station", "Skyline Tower"]),
            member(7, "Maria Garcia", "Landscape Architect", "MG", "maria.garcia@structura.com", "(555) 101-2007", 2, &["Green Campus", "Riverside Apts"]),
            member(8, "Tom Bennett", "BIM Specialist", "TB", "tom.bennett@structura.com", "(555) 101-2008", 4, &["Skyline Tower", "Harbor Bridge", "Metro Station", "Innovation Lab"]),
        ]
    }

    fn kanban_tasks(&self) -> Vec<KanbanTask> {
        use TaskPriority::{High, Low, Medium};
        use TaskStatus::{Done, InProgress, Todo};
        vec![
            task(1, "Foundation survey report", Done, High, "JW"),
            task(2, "Electrical layout — Floor 3", InProgress, Medium, "LT"),
            task(3, "Client presentation deck", InProgress, High, "SC"),
            task(4, "Fire safety compliance check", Todo, High, "DP"),
            task(5, "Interior material selection", Todo, Low, "ED"),
            task(6, "Roof drainage design", InProgress, Medium, "JW"),
            task(7, "Permit application submission", Todo, High, "DP"),
            task(8, "Landscape concept review", Done, Low, "ED"),
        ]
    }

    fn chat_rooms(&self) -> Vec<ChatRoom> {
        vec![
            room(1, "Skyline Tower — General", "Updated the facade renderings", "2 min ago", 3),
            room(2, "Harbor Bridge — Design", "Structural analysis ready for review", "15 min ago", 1),
            room(3, "Green Campus — Client", "Approved the landscape plan", "1 hr ago", 0),
            room(4, "Metro Station — Engineering", "Load calculations attached", "3 hr ago", 5),
        ]
    }

    fn timeline_events(&self) -> Vec<TimelineEvent> {
        vec![
            event("Feb 8", "Facade design approved", "Client signed off on the updated facade renderings"),
            event("Feb 5", "Structural review complete", "All load-bearing calculations verified"),
            event("Feb 1", "Phase 2 kicked off", "Interior design and MEP planning initiated"),
            event("Jan 28", "Foundation completed", "On-site foundation work finished ahead of schedule"),
            event("Jan 20", "Permits approved", "City planning board granted all required permits"),
        ]
    }
}
