mod generators;
mod loaders;

pub use generators::*;
pub use loaders::*;

/// Bundled seed data.
#[derive(Debug, Clone)]
pub struct DatabaseEntity {
    pub clubs: Vec<ClubEntity>,
    pub referees: Vec<RefereeEntity>,
    pub names: NamesEntity,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> Result<DatabaseEntity, serde_json::Error> {
        Ok(DatabaseEntity {
            clubs: ClubLoader::load()?,
            referees: RefereeLoader::load()?,
            names: NamesLoader::load()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_bundled_data_loads() {
        let database = DatabaseLoader::load().unwrap();

        assert_eq!(database.clubs.len(), 20);
        assert!(database.referees.len() >= database.clubs.len() / 2);
        assert!(!database.names.first_names.is_empty());
        assert!(!database.names.last_names.is_empty());

        let ids: HashSet<u32> = database.clubs.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), database.clubs.len());
    }
}
