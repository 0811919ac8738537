use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub date_of_birth: Date,
    pub department_id: String,
    pub enrollment_date: Date,
    pub is_active: bool,
    /// `first_name` lower-cased with full Unicode case folding; kept in sync on save.
    pub first_name_lower: String,
    /// `last_name` lower-cased with full Unicode case folding; kept in sync on save.
    pub last_name_lower: String,
    /// Space-delimited words of the first name, last name and email, kept in sync on save.
    pub search_terms: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentId",
        to = "super::department::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Department,
    #[sea_orm(has_many = "super::course::Entity")]
    Course,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let keys = match (
            self.first_name.try_as_ref(),
            self.last_name.try_as_ref(),
            self.email.try_as_ref(),
        ) {
            (Some(first_name), Some(last_name), Some(email)) => Some((
                name_key(first_name),
                name_key(last_name),
                search_terms(first_name, last_name, email),
            )),
            _ => None,
        };

        if let Some((first_name_lower, last_name_lower, terms)) = keys {
            self.first_name_lower = sea_orm::ActiveValue::Set(first_name_lower);
            self.last_name_lower = sea_orm::ActiveValue::Set(last_name_lower);
            self.search_terms = sea_orm::ActiveValue::Set(terms);
        }

        Ok(self)
    }
}

/// Lower-cases a name for case-insensitive substring matching.
pub fn name_key(name: &str) -> String {
    name.to_lowercase()
}

/// Splits text into lower-cased alphanumeric words.
///
/// Used both when storing `search_terms` and when tokenizing a search query, so the two
/// sides always fold case the same way.
pub fn split_words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Builds the `search_terms` value: every word padded by a single space on both sides,
/// so `LIKE '% word %'` matches whole words only.
pub fn search_terms(first_name: &str, last_name: &str, email: &str) -> String {
    let words: Vec<String> = [first_name, last_name, email]
        .into_iter()
        .flat_map(split_words)
        .collect();

    format!(" {} ", words.join(" "))
}
