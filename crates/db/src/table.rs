use sea_query::Iden;

/// Key-value documents, one JSON value per key.
#[derive(Iden, Clone)]
pub enum Storage {
    Table,
    Key,
    Value,
    UpdatedAt,
}
