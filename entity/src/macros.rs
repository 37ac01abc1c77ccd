/// Implements `ActiveModelBehavior` for a timestamped table: fresh active models
/// start with the given column defaults and both timestamps, and every save
/// refreshes `updated_at`.
macro_rules! timestamped_behavior {
    ($($field:ident: $value:expr),* $(,)?) => {
        #[async_trait::async_trait]
        impl sea_orm::ActiveModelBehavior for ActiveModel {
            fn new() -> Self {
                let now = $crate::dict::now();
                Self {
                    $($field: sea_orm::ActiveValue::Set($value),)*
                    created_at: sea_orm::ActiveValue::Set(now),
                    updated_at: sea_orm::ActiveValue::Set(now),
                    ..<Self as sea_orm::ActiveModelTrait>::default()
                }
            }

            async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, sea_orm::DbErr>
            where
                C: sea_orm::ConnectionTrait,
            {
                let now = $crate::dict::now();
                if insert && !self.created_at.is_set() {
                    self.created_at = sea_orm::ActiveValue::Set(now);
                }
                self.updated_at = sea_orm::ActiveValue::Set(now);
                Ok(self)
            }
        }
    };
}

pub(crate) use timestamped_behavior;
