use crate::models::trip::Trip;
use crate::utils::table::{Column, Table};

/// Walks through raw trips a fixed number of rows at a time.
pub struct RawPager<'a> {
    trips: &'a [Trip],
    demographics: bool,
    page_size: usize,
    offset: usize,
}

impl<'a> RawPager<'a> {
    pub fn new(trips: &'a [Trip], demographics: bool, page_size: usize) -> Self {
        Self {
            trips,
            demographics,
            page_size: page_size.max(1),
            offset: 0,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.offset >= self.trips.len()
    }

    /// Render the next page, or `None` once every row has been shown.
    pub fn next_page(&mut self) -> Option<String> {
        if self.is_exhausted() {
            return None;
        }
        let end = (self.offset + self.page_size).min(self.trips.len());
        let page = render_rows(&self.trips[self.offset..end], self.offset, self.demographics);
        self.offset = end;
        Some(page)
    }
}

fn render_rows(trips: &[Trip], first_index: usize, demographics: bool) -> String {
    let mut columns = vec![
        Column::right("#"),
        Column::left("Start Time"),
        Column::left("End Time"),
        Column::right("Trip Duration"),
        Column::left("Start Station"),
        Column::left("End Station"),
        Column::left("User Type"),
    ];
    if demographics {
        columns.push(Column::left("Gender"));
        columns.push(Column::right("Birth Year"));
    }

    let mut table = Table::new(columns);
    for (i, t) in trips.iter().enumerate() {
        let mut row = vec![
            (first_index + i).to_string(),
            t.start_time_str(),
            t.end_time.clone().unwrap_or_default(),
            t.duration.to_string(),
            t.start_station.clone(),
            t.end_station.clone(),
            t.user_type.clone().unwrap_or_default(),
        ];
        if demographics {
            row.push(t.gender.clone().unwrap_or_default());
            row.push(t.birth_year.map(|y| y.to_string()).unwrap_or_default());
        }
        table.add_row(row);
    }
    table.render()
}
