//! Validation utilities for the Consignment Inventory Platform

// ============================================================================
// Inventory Validations
// ============================================================================

/// Validate a requested quantity (sales, distributions, adjustments)
pub fn validate_quantity(quantity: i32) -> Result<(), &'static str> {
    if quantity <= 0 {
        return Err("Quantity must be positive");
    }
    Ok(())
}

/// Validate a product price in integral currency units
pub fn validate_price(price: i64) -> Result<(), &'static str> {
    if price < 0 {
        return Err("Price cannot be negative");
    }
    Ok(())
}

/// Validate a discount percentage
pub fn validate_discount(discount: i16) -> Result<(), &'static str> {
    if !(0..=100).contains(&discount) {
        return Err("Discount must be between 0 and 100");
    }
    Ok(())
}

/// Validate SKU format (3-16 uppercase alphanumeric, dashes allowed, e.g. "BRP-001")
pub fn validate_sku(sku: &str) -> Result<(), &'static str> {
    if sku.len() < 3 {
        return Err("SKU must be at least 3 characters");
    }
    if sku.len() > 16 {
        return Err("SKU must be at most 16 characters");
    }
    if !sku
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-')
    {
        return Err("SKU must be uppercase alphanumeric, dashes allowed");
    }
    Ok(())
}

// ============================================================================
// General Validations
// ============================================================================

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    Ok(())
}
