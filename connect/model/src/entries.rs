//! Add-one-entry helpers for keyed and list members.
//!
//! Map and list members are otherwise plain `Option<..>` values. The helpers
//! generated by [`map_entries!`] add a single entry at a time and refuse to
//! overwrite an existing key; those from [`sequence_items!`] append one item.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use tracing::debug;

use crate::error::ModelError;

/// Inserts `key` into the map held by `slot`, creating the map if absent.
///
/// Returns [`ModelError::DuplicateKey`] without touching the map when the key
/// is already present.
pub(crate) fn insert_entry<V>(
    slot: &mut Option<BTreeMap<String, V>>,
    shape: &'static str,
    field: &'static str,
    key: String,
    value: V,
) -> Result<(), ModelError> {
    match slot.get_or_insert_with(BTreeMap::new).entry(key) {
        Entry::Occupied(existing) => {
            debug!(shape, field, key = %existing.key(), "Rejected duplicate map entry");
            Err(ModelError::DuplicateKey {
                shape,
                field,
                key: existing.key().clone(),
            })
        }
        Entry::Vacant(vacant) => {
            vacant.insert(value);
            Ok(())
        }
    }
}

/// Generates `add_*_entry` and `clear_*_entries` methods for map members.
///
/// ```ignore
/// map_entries! {
///     Contact {
///         tags: add_tags_entry / clear_tags_entries => String,
///     }
/// }
/// ```
macro_rules! map_entries {
    (
        $shape:ident {
            $( $field:ident : $add:ident / $clear:ident => $value:ty ),+ $(,)?
        }
    ) => {
        impl $shape {
            $(
                #[doc = concat!("Adds one entry to `", stringify!($field), "`, creating the map if needed.")]
                ///
                /// Fails with [`ModelError::DuplicateKey`](crate::ModelError::DuplicateKey)
                /// if the key is already present; the map is then left unchanged.
                pub fn $add(
                    &mut self,
                    key: impl Into<String>,
                    value: impl Into<$value>,
                ) -> Result<&mut Self, $crate::error::ModelError> {
                    $crate::entries::insert_entry(
                        &mut self.$field,
                        <Self as connect_define::Shape>::SHAPE_NAME,
                        stringify!($field),
                        key.into(),
                        value.into(),
                    )?;
                    Ok(self)
                }

                #[doc = concat!("Removes every entry of `", stringify!($field), "`, leaving it absent.")]
                pub fn $clear(&mut self) -> &mut Self {
                    self.$field = None;
                    self
                }
            )+
        }
    };
}

/// Generates `add_*_item` methods for list members.
///
/// Appending keeps what is already in the list; assigning the field or
/// calling the builder setter replaces it.
///
/// ```ignore
/// sequence_items! {
///     GetMetricDataRequest {
///         groupings: add_groupings_item => Grouping,
///     }
/// }
/// ```
macro_rules! sequence_items {
    (
        $shape:ident {
            $( $field:ident : $add:ident => $item:ty ),+ $(,)?
        }
    ) => {
        impl $shape {
            $(
                #[doc = concat!("Appends one item to `", stringify!($field), "`, creating the list if needed.")]
                pub fn $add(&mut self, item: impl Into<$item>) -> &mut Self {
                    self.$field.get_or_insert_with(Vec::new).push(item.into());
                    self
                }
            )+
        }
    };
}
