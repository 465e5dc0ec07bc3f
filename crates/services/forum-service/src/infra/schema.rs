//! Table creation from the SeaORM entity definitions.
//!
//! Only creates what is missing; there is no migration history.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};

use crate::repository::entities::{comment, topic, user, vote};

/// Create `Users`, `Topics`, `Votes` and `Comments` if absent.
///
/// Referenced tables come first so foreign keys resolve.
pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let schema = Schema::new(db.get_database_backend());

    create_table(db, &schema, user::Entity).await?;
    create_table(db, &schema, topic::Entity).await?;
    create_table(db, &schema, vote::Entity).await?;
    create_table(db, &schema, comment::Entity).await?;

    Ok(())
}

async fn create_table<E>(db: &DatabaseConnection, schema: &Schema, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait + Copy,
{
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();

    db.execute(db.get_database_backend().build(&statement)).await?;
    tracing::debug!(table = entity.table_name(), "Table ensured");

    Ok(())
}
