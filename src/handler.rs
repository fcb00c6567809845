use crate::core::activity::ActivityId;
use crate::core::command::{ActivityUpdate, Command, ListFilter};
use crate::core::error::CommandError;
use crate::inmemory_db::Db;
use crate::session::Outcome;

pub fn dispatch(db: &Db, command: Command) -> Result<Outcome, CommandError> {
    let output = match command {
        Command::Quit => return Ok(Outcome::Quit),
        Command::Empty => return Ok(Outcome::Continue(None)),
        Command::Add { description } => add(db, description),
        Command::List { filter } => list(db, filter),
        Command::Update { id, update: change } => update(db, id, change)?,
        Command::Delete { id } => delete(db, id)?,
    };
    Ok(Outcome::Continue(Some(output)))
}

pub fn add(db: &Db, description: String) -> String {
    let activity = db.add_activity(description);
    log::debug!("added activity {}", activity.id);
    format!(
        "Added activity: ID={}, Description='{}', Status={}",
        activity.id, activity.description, activity.status
    )
}

pub fn list(db: &Db, filter: ListFilter) -> String {
    let activities = db.list_activities(filter);
    let mut lines = vec!["List Activities:".to_string()];

    if activities.is_empty() {
        let label = match filter {
            ListFilter::All => "all",
            ListFilter::Status(status) => status.as_str(),
        };
        lines.push(format!("There are no activities with status '{label}'"));
    } else {
        lines.extend(activities.iter().map(ToString::to_string));
    }

    lines.join("\n")
}

pub fn update(db: &Db, id: ActivityId, change: ActivityUpdate) -> Result<String, CommandError> {
    let activity = db.update_activity(id, change.clone())?;
    log::debug!("updated activity {id} at {}", activity.updated_at);
    Ok(match change {
        ActivityUpdate::SetDescription(description) => {
            format!("Updated activity {id} description to {description}")
        }
        ActivityUpdate::SetStatus(status) => format!("Updated activity {id} status to {status}"),
    })
}

pub fn delete(db: &Db, id: ActivityId) -> Result<String, CommandError> {
    db.delete_activity(id)?;
    log::debug!("deleted activity {id}");
    Ok(format!("Activity Id {id} has been deleted"))
}
