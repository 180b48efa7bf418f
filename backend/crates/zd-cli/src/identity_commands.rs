use clap::Subcommand;

#[derive(Subcommand)]
pub enum IdentityCommands {
    /// List a user's identities
    List {
        /// End user ID
        user_id: i64,

        /// Page number
        #[arg(long)]
        page: Option<u32>,

        /// Results per page
        #[arg(long)]
        per_page: Option<u32>,
    },

    /// Add an identity to a user
    Create {
        /// End user ID
        user_id: i64,

        /// Identity type (email, phone_number, twitter, facebook, google, ...)
        #[arg(long)]
        r#type: String,

        /// Contact value, e.g. an email address or phone number
        #[arg(long)]
        value: String,
    },

    /// Make an identity the user's primary one
    MakePrimary {
        /// End user ID
        user_id: i64,

        /// Identity ID
        identity_id: i64,
    },

    /// Mark an identity as verified
    Verify {
        /// User ID
        user_id: i64,

        /// Identity ID
        identity_id: i64,
    },

    /// Remove an identity from a user
    Delete {
        /// End user ID
        user_id: i64,

        /// Identity ID
        identity_id: i64,
    },
}
