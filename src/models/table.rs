use super::{city::City, trip::Trip};

/// Trips of one city, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    city: City,
    trips: Vec<Trip>,
}

impl TripTable {
    pub fn new(city: City, trips: Vec<Trip>) -> Self {
        Self { city, trips }
    }

    pub fn city(&self) -> City {
        self.city
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

impl<'a> IntoIterator for &'a TripTable {
    type Item = &'a Trip;
    type IntoIter = std::slice::Iter<'a, Trip>;

    fn into_iter(self) -> Self::IntoIter {
        self.trips.iter()
    }
}
