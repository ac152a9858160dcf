//! Legs and trips.
//!
//! A `Trip` is resolved into one of two shapes when it is ingested: a
//! single leg, or an ordered, non-empty list of legs. Nothing downstream
//! has to inspect the raw record again to tell them apart.

use super::{DomainError, Stop};

/// One uninterrupted ride (or walk) between two stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    pub origin: Stop,
    pub destination: Stop,
    /// Short line identifier, e.g. `"6"`; absent for walks
    pub line: Option<String>,
}

impl Leg {
    /// Creates a leg without a line.
    pub fn new(origin: Stop, destination: Stop) -> Self {
        Self {
            origin,
            destination,
            line: None,
        }
    }

    /// Sets the line identifier.
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.line = Some(line.into());
        self
    }

    /// Normalize both ends of the leg.
    pub fn normalize(&mut self) {
        self.origin.normalize();
        self.destination.normalize();
    }
}

/// Ordered legs of a multi-stage trip. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Legs(Vec<Leg>);

impl Legs {
    /// Wrap a list of legs, rejecting an empty one.
    pub fn new(legs: Vec<Leg>) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyTrip);
        }
        Ok(Self(legs))
    }

    /// The first leg.
    pub fn first(&self) -> &Leg {
        &self.0[0]
    }

    /// The last leg.
    pub fn last(&self) -> &Leg {
        &self.0[self.0.len() - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Leg> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Leg> {
        self.0.iter_mut()
    }
}

impl<'a> IntoIterator for &'a Legs {
    type Item = &'a Leg;
    type IntoIter = std::slice::Iter<'a, Leg>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A full journey as suggested by the planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trip {
    /// The planner returned a single leg object
    SingleLeg(Leg),
    /// The planner returned a list of legs
    MultiLeg(Legs),
}

impl Trip {
    /// Stop where the trip starts.
    pub fn origin(&self) -> &Stop {
        match self {
            Trip::SingleLeg(leg) => &leg.origin,
            Trip::MultiLeg(legs) => &legs.first().origin,
        }
    }

    /// Stop where the trip ends.
    pub fn destination(&self) -> &Stop {
        match self {
            Trip::SingleLeg(leg) => &leg.destination,
            Trip::MultiLeg(legs) => &legs.last().destination,
        }
    }

    /// Normalize every stop on the trip.
    pub fn normalize(&mut self) {
        match self {
            Trip::SingleLeg(leg) => leg.normalize(),
            Trip::MultiLeg(legs) => legs.iter_mut().for_each(Leg::normalize),
        }
    }
}
