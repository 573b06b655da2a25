//! # Parcel Specification
//!
//! Validated parcel weight and dimensions.
//!
//! A [`ParcelSpec`] is immutable per quote request. It is either constructed
//! directly from checkout input or derived from a cart: total weight is the
//! quantity-weighted sum of item weights, and the dimensions are those of the
//! single largest-by-volume item.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weight and dimensions of a parcel to be quoted.
///
/// # Invariants
///
/// - Weight and every dimension are strictly positive, finite numbers.
///
/// # Examples
///
/// ```
/// use shipquote::domain::value_objects::ParcelSpec;
///
/// let parcel = ParcelSpec::new(5.0, 40.0, 30.0, 20.0).unwrap();
/// assert_eq!(parcel.weight_kg(), 5.0);
/// assert!(ParcelSpec::new(-1.0, 40.0, 30.0, 20.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParcelSpec {
    /// Weight in kilograms.
    weight_kg: f64,
    /// Length in centimetres.
    length_cm: f64,
    /// Width in centimetres.
    width_cm: f64,
    /// Height in centimetres.
    height_cm: f64,
}

impl ParcelSpec {
    /// Creates a parcel spec with validation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidWeight` if the weight is not a positive,
    /// finite number, or `DomainError::InvalidDimension` for any dimension
    /// that is not.
    pub fn new(weight_kg: f64, length_cm: f64, width_cm: f64, height_cm: f64) -> DomainResult<Self> {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(DomainError::InvalidWeight(weight_kg.to_string()));
        }
        for dimension in [length_cm, width_cm, height_cm] {
            if !dimension.is_finite() || dimension <= 0.0 {
                return Err(DomainError::InvalidDimension(dimension.to_string()));
            }
        }
        Ok(Self {
            weight_kg,
            length_cm,
            width_cm,
            height_cm,
        })
    }

    /// Derives the parcel for a whole cart.
    ///
    /// Weight is the quantity-weighted sum of item weights; dimensions come
    /// from the single largest-by-volume item, since items ship together in
    /// one consignment sized for the biggest part.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyCart` if the cart has no items, or a
    /// validation error if the derived values are not positive.
    pub fn from_cart(items: &[CartItem]) -> DomainResult<Self> {
        let largest = items
            .iter()
            .max_by(|a, b| a.volume_cm3().total_cmp(&b.volume_cm3()))
            .ok_or(DomainError::EmptyCart)?;
        let weight_kg = items
            .iter()
            .map(|item| item.weight_kg * f64::from(item.quantity))
            .sum();
        Self::new(
            weight_kg,
            largest.length_cm,
            largest.width_cm,
            largest.height_cm,
        )
    }

    /// Returns the weight in kilograms.
    #[inline]
    #[must_use]
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Returns the length in centimetres.
    #[inline]
    #[must_use]
    pub fn length_cm(&self) -> f64 {
        self.length_cm
    }

    /// Returns the width in centimetres.
    #[inline]
    #[must_use]
    pub fn width_cm(&self) -> f64 {
        self.width_cm
    }

    /// Returns the height in centimetres.
    #[inline]
    #[must_use]
    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// Returns the volume in cubic centimetres.
    #[must_use]
    pub fn volume_cm3(&self) -> f64 {
        self.length_cm * self.width_cm * self.height_cm
    }
}

impl fmt::Display for ParcelSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}kg {}x{}x{}cm",
            self.weight_kg, self.length_cm, self.width_cm, self.height_cm
        )
    }
}

/// The projection of a storefront cart line needed to derive a parcel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// The listing this line refers to.
    pub listing_id: String,
    /// How many units of the listing are in the cart.
    pub quantity: u32,
    /// Weight of one unit in kilograms.
    pub weight_kg: f64,
    /// Length of one unit in centimetres.
    pub length_cm: f64,
    /// Width of one unit in centimetres.
    pub width_cm: f64,
    /// Height of one unit in centimetres.
    pub height_cm: f64,
}

impl CartItem {
    /// Returns the volume of one unit in cubic centimetres.
    #[must_use]
    pub fn volume_cm3(&self) -> f64 {
        self.length_cm * self.width_cm * self.height_cm
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(listing_id: &str, quantity: u32, weight_kg: f64, dims: [f64; 3]) -> CartItem {
        CartItem {
            listing_id: listing_id.to_string(),
            quantity,
            weight_kg,
            length_cm: dims[0],
            width_cm: dims[1],
            height_cm: dims[2],
        }
    }

    #[test]
    fn new_accepts_positive_values() {
        let parcel = ParcelSpec::new(5.0, 40.0, 30.0, 20.0).unwrap();
        assert_eq!(parcel.weight_kg(), 5.0);
        assert_eq!(parcel.volume_cm3(), 24_000.0);
    }

    #[test]
    fn new_rejects_non_positive_weight() {
        assert!(matches!(
            ParcelSpec::new(0.0, 40.0, 30.0, 20.0),
            Err(DomainError::InvalidWeight(_))
        ));
        assert!(matches!(
            ParcelSpec::new(-5.0, 40.0, 30.0, 20.0),
            Err(DomainError::InvalidWeight(_))
        ));
    }

    #[test]
    fn new_rejects_non_finite_weight() {
        assert!(ParcelSpec::new(f64::NAN, 40.0, 30.0, 20.0).is_err());
        assert!(ParcelSpec::new(f64::INFINITY, 40.0, 30.0, 20.0).is_err());
    }

    #[test]
    fn new_rejects_non_positive_dimension() {
        assert!(matches!(
            ParcelSpec::new(5.0, 40.0, 0.0, 20.0),
            Err(DomainError::InvalidDimension(_))
        ));
    }

    #[test]
    fn from_cart_sums_weight_by_quantity() {
        let items = vec![
            item("bumper", 2, 4.0, [50.0, 20.0, 20.0]),
            item("mirror", 1, 1.5, [20.0, 15.0, 15.0]),
        ];
        let parcel = ParcelSpec::from_cart(&items).unwrap();
        assert_eq!(parcel.weight_kg(), 9.5);
    }

    #[test]
    fn from_cart_takes_dimensions_of_largest_item() {
        let items = vec![
            item("mirror", 1, 1.5, [20.0, 15.0, 15.0]),
            item("bonnet", 1, 12.0, [150.0, 120.0, 10.0]),
        ];
        let parcel = ParcelSpec::from_cart(&items).unwrap();
        assert_eq!(parcel.length_cm(), 150.0);
        assert_eq!(parcel.width_cm(), 120.0);
        assert_eq!(parcel.height_cm(), 10.0);
    }

    #[test]
    fn from_cart_rejects_empty_cart() {
        assert!(matches!(
            ParcelSpec::from_cart(&[]),
            Err(DomainError::EmptyCart)
        ));
    }

    #[test]
    fn display() {
        let parcel = ParcelSpec::new(5.0, 40.0, 30.0, 20.0).unwrap();
        assert_eq!(parcel.to_string(), "5kg 40x30x20cm");
    }
}
