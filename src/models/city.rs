use clap::ValueEnum;
use std::fmt;

/// Cities with a bikeshare dataset.
///
/// Each city is bound to exactly one CSV file; Chicago and New York City
/// also carry gender and birth year columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// Backing dataset file, relative to the configured data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    pub fn has_demographics(&self) -> bool {
        match self {
            City::Chicago | City::NewYorkCity => true,
            City::Washington => false,
        }
    }

    /// Helper: convert free-text input (any case, surrounding blanks) into a city
    pub fn from_input(input: &str) -> Option<Self> {
        let normalized = input.split_whitespace().collect::<Vec<_>>().join(" ");
        City::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(&normalized))
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
