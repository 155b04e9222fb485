// Table definitions for Diesel's query builder.
// Kept in sync with the CREATE TABLE statements in repository::context.

diesel::table! {
    documents (id) {
        id -> Integer,
        filename -> Text,
        pages -> Integer,
        text_preview -> Text,
        tipo_documento -> Nullable<Text>,
        fecha -> Nullable<Text>,
        emisor -> Nullable<Text>,
        receptor -> Nullable<Text>,
        total -> Nullable<Text>,
        moneda -> Nullable<Text>,
        rfc_emisor -> Nullable<Text>,
        conceptos -> Nullable<Text>,
        subtotal -> Nullable<Text>,
        iva -> Nullable<Text>,
        resumen -> Nullable<Text>,
        created_at -> Text,
    }
}
