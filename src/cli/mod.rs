use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive chat session (/reset clears history, /quit exits)
    Chat,

    /// Ask a single medical question and print the transcript
    Ask {
        question: String,
    },

    /// Analyze a medical image (JPEG or PNG)
    Analyze {
        /// Path to the image file
        image: String,

        /// What you'd like to know about the image
        #[arg(short, long)]
        prompt: Option<String>,
    },
}
