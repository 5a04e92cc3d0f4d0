use std::fmt;

/// Business fields that carry a validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    TransactionId,
    Address,
    Zip,
    CardNum,
    CardCode,
    ExpDate,
    Amount,
}

impl Field {
    /// The name the caller knows the field by.
    pub fn name(&self) -> &'static str {
        match self {
            Field::TransactionId => "transaction",
            Field::Address => "address",
            Field::Zip => "zip",
            Field::CardNum => "card_num",
            Field::CardCode => "card_code",
            Field::ExpDate => "exp_date",
            Field::Amount => "amount",
        }
    }

    /// The form field name the gateway expects.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Field::TransactionId => "x_trans_id",
            Field::Address => "x_address",
            Field::Zip => "x_zip",
            Field::CardNum => "x_card_num",
            Field::CardCode => "x_card_code",
            Field::ExpDate => "x_exp_date",
            Field::Amount => "x_amount",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
