// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! `#[serde(with = "crate::serde_quantity")]` for `qtty` fields: a quantity
//! is written as its bare `f64` in the field's declared unit.

use qtty::{Quantity, Unit};
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<U, S>(quantity: &Quantity<U>, serializer: S) -> Result<S::Ok, S::Error>
where
    U: Unit,
    S: Serializer,
{
    serializer.serialize_f64(quantity.value())
}

pub fn deserialize<'de, U, D>(deserializer: D) -> Result<Quantity<U>, D::Error>
where
    U: Unit,
    D: Deserializer<'de>,
{
    let v = f64::deserialize(deserializer)?;
    Ok(Quantity::<U>::new(v))
}
