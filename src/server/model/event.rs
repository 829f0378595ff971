//! Event domain models and parameters.

use crate::{
    model::event::{EventDateDto, EventDto},
    server::model::venue::Venue,
};

/// Scheduled event tied to exactly one venue.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Database id of the event.
    pub id: i32,
    /// Unique business key carried over from the source dataset.
    pub event_id: i64,
    /// Event title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Optional presenting organisation or person.
    pub presenter: Option<String>,
    /// Optional price text as displayed.
    pub price: Option<String>,
    /// Hosting venue, when the join produced one.
    pub venue: Option<Venue>,
    /// Scheduled {date, time} entries.
    pub dates: Vec<EventDate>,
}

/// One scheduled {date, time} entry of an event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDate {
    /// Date string as displayed.
    pub date: String,
    /// Time string as displayed, possibly empty.
    pub time: String,
}

impl EventDate {
    /// Converts an entity model to an event date domain model.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `EventDate` - The converted domain model
    pub fn from_entity(entity: entity::event_date::Model) -> Self {
        Self {
            date: entity.date,
            time: entity.time,
        }
    }

    /// Converts the event date to its DTO.
    pub fn into_dto(self) -> EventDateDto {
        EventDateDto {
            date: self.date,
            time: self.time,
        }
    }
}

impl Event {
    /// Assembles an event domain model from its entity parts.
    ///
    /// # Arguments
    /// - `entity` - The event entity model
    /// - `venue` - The joined venue entity, if any
    /// - `dates` - The event's date entities
    ///
    /// # Returns
    /// - `Event` - The converted event domain model
    pub fn from_entity(
        entity: entity::event::Model,
        venue: Option<entity::venue::Model>,
        dates: Vec<entity::event_date::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            event_id: entity.event_id,
            title: entity.title,
            description: entity.description,
            presenter: entity.presenter,
            price: entity.price,
            venue: venue.map(Venue::from_entity),
            dates: dates.into_iter().map(EventDate::from_entity).collect(),
        }
    }

    /// Converts the event domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `EventDto` - The converted event DTO with venue summary and dates
    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            event_id: self.event_id,
            title: self.title,
            description: self.description,
            presenter: self.presenter,
            price: self.price,
            venue: self.venue.map(Venue::into_summary_dto),
            dates: self.dates.into_iter().map(EventDate::into_dto).collect(),
        }
    }
}

/// Parameters for creating an event.
///
/// The venue is referenced by database id; the service resolves the business
/// key from the request before building these params.
#[derive(Debug, Clone)]
pub struct CreateEventParams {
    /// Assigned unique business key.
    pub event_id: i64,
    /// Event title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Optional presenter.
    pub presenter: Option<String>,
    /// Optional price text.
    pub price: Option<String>,
    /// Database id of the hosting venue.
    pub venue_id: i32,
    /// Scheduled {date, time} entries.
    pub dates: Vec<EventDate>,
}

/// Parameters for partially updating an event.
///
/// `None` fields are left unchanged; a present `dates` list replaces the
/// stored entries wholesale.
#[derive(Debug, Clone, Default)]
pub struct UpdateEventParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub presenter: Option<String>,
    pub price: Option<String>,
    /// Database id of the new hosting venue, when re-homing the event.
    pub venue_id: Option<i32>,
    pub dates: Option<Vec<EventDate>>,
}
