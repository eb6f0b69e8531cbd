//! Terminal front end for the signup flow. Each line of input is one field
//! event; pressing Enter on the last field is the "Get Started"/submit action.
//! The session only forwards input to the flow and prints what the flow
//! reports, so the rules live in [`crate::signup`] alone.

use crate::signup::{FlowState, Navigator, RegistrationClient, RegistrationFlow, Rejection};
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};

const EMAIL_HINT: &str = "Enter your email to get started.";

/// Runs the signup screen until registration succeeds or input ends.
///
/// Returns `true` once the flow reached [`FlowState::Registered`], after
/// printing any notice the navigator left.
///
/// # Errors
/// Returns an error if reading input or writing output fails.
pub async fn run<C, N, R, W>(
    flow: &mut RegistrationFlow<C, N>,
    input: R,
    mut output: W,
) -> Result<bool>
where
    C: RegistrationClient,
    N: Navigator,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    loop {
        let ask_email =
            !flow.details_visible() || flow.rejection() == Some(&Rejection::InvalidEmail);
        if ask_email {
            let Some(email) = prompt(&mut lines, &mut output, "Email: ").await? else {
                return Ok(false);
            };
            flow.set_email(email.trim());

            if !flow.details_visible() {
                flow.advance().await;
                if !flow.details_visible() {
                    write_line(&mut output, EMAIL_HINT).await?;
                }
                continue;
            }
        }

        let Some(phone) = prompt(&mut lines, &mut output, "Phone: ").await? else {
            return Ok(false);
        };
        flow.set_phone(phone.trim());

        let Some(username) = prompt(&mut lines, &mut output, "Username: ").await? else {
            return Ok(false);
        };
        flow.set_username(username.trim());

        let Some(password) = prompt(&mut lines, &mut output, "Password: ").await? else {
            return Ok(false);
        };
        flow.set_password(password);

        match flow.advance().await {
            FlowState::Registered => {
                if let Some(notice) = flow.navigator().take_notice() {
                    write_line(&mut output, &notice).await?;
                }
                return Ok(true);
            }
            FlowState::Rejected(rejection) => {
                let message = format!("error: {rejection}");
                write_line(&mut output, &message).await?;
            }
            _ => {}
        }
    }
}

async fn prompt<R, W>(lines: &mut Lines<R>, output: &mut W, label: &str) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(label.as_bytes()).await?;
    output.flush().await?;
    Ok(lines.next_line().await?)
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, line: &str) -> Result<()> {
    output.write_all(line.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}
