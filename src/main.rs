use enroll_button_core::app::enroll_in_course;
use enroll_button_core::client::request::NoWasmClient;
use enroll_button_core::error::Result;
use enroll_button_core::interface::HttpClient;
use enroll_button_core::model::dtos::EnrollParams;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        println!("usage: {} <course-id> <csrf-token> [base-url]", args[0]);
        return Ok(());
    }

    let client = match args.get(3) {
        Some(base_url) => NoWasmClient::with_base_url(base_url)?,
        None => NoWasmClient::new().await?,
    };

    let params = EnrollParams {
        course_id: &args[1],
        csrf_token: &args[2],
    };

    println!("Enrolling in course {} at {}", args[1], client.base_url());

    match enroll_in_course(&client, params).await {
        Ok(target) => {
            println!("Enrolled. Continue at {target}");
            Ok(())
        }
        Err(e) => {
            println!("Enrollment failed: {}", e.user_message());
            Err(e)
        }
    }
}
