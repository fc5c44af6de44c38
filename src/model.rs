/// Characters that can receive nectar
pub const DEFAULT_CATALOG: &[&str] = &[
    "Melinoë",
    "Hecate",
    "Moros",
    "Apollo",
    "Nemesis",
    "Dora",
    "Chronos",
    "Odysseus",
    "Hestia",
    "Hephaestus",
    "Selene",
    "Arachne",
    "Eris",
    "Narcissus",
    "Scylla",
    "Hera",
    "Circe",
    "Heracles",
    "Medea",
    "Polyphemus",
    "Icarus",
    "Schelemeus",
    "Echo",
    "Hades",
    "Zeus",
    "Demeter",
    "Poseidon",
    "Artemis",
    "Aphrodite",
    "Hypnos",
    "Charon",
    "Hermes",
    "Chaos",
];

/// Fixed, ordered set of tracked names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    names: Vec<String>,
}

impl Catalog {
    /// Build a catalog, keeping the first occurrence of any repeated name
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        Self { names: unique }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG.iter().copied())
    }
}

/// One character and their nectar count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub name: String,
    pub count: u32,
}

/// Name to count mapping over a catalog, iterated in catalog order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    /// Every catalog name at zero
    pub fn zeroed(catalog: &Catalog) -> Self {
        Self {
            entries: catalog
                .names()
                .iter()
                .map(|name| RosterEntry {
                    name: name.clone(),
                    count: 0,
                })
                .collect(),
        }
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.count)
    }

    /// Overwrite a count. Returns false if the name isn't in the roster.
    pub fn set(&mut self, name: &str, count: u32) -> bool {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => {
                entry.count = count;
                true
            }
            None => false,
        }
    }

    pub(crate) fn entry_mut(&mut self, name: &str) -> Option<&mut RosterEntry> {
        self.entries.iter_mut().find(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Column the list is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Count,
}

impl SortKey {
    /// Column header text
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Count => "Nectar Count",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Marker shown next to the active column header
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}
