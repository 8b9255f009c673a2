use store::FormField;

/// Visible label, also used as the create form's placeholder.
pub(crate) fn label(field: FormField) -> &'static str {
    match field {
        FormField::Name => "Name",
        FormField::Email => "Email",
        FormField::Password => "Password",
    }
}

pub(crate) fn input_type(field: FormField) -> &'static str {
    match field {
        FormField::Name => "text",
        FormField::Email => "email",
        FormField::Password => "password",
    }
}

/// Example value shown in the empty inputs of the edit dialog.
pub(crate) fn example(field: FormField) -> &'static str {
    match field {
        FormField::Name => "Pedro Duarte",
        FormField::Email => "peduarte@outlook.com",
        FormField::Password => "peduarte123",
    }
}
