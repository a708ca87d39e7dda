//! Support files
//!
//! Fixed top-level documents. Only the project README uses the title; the
//! others name the Detect_Drift project literally.

pub fn readme(project_title: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("# {}\n\n", project_title));
    output.push_str("## Problem Statement\n\n");
    output.push_str("Configuration drift occurs when the actual state of infrastructure (particularly Kubernetes clusters) diverges from the desired state defined in Git repositories. This project aims to develop a comprehensive tool to detect, report, and remediate drift across multiple clusters and environments.\n\n");

    output.push_str("## Project Structure\n\n");
    output.push_str("This repository contains a 24-week DevOps/SRE internship project broken down into daily tasks.\n\n");

    output.push_str("### Getting Started\n\n");
    output.push_str("1. Start with the Week 1, Day 1 tasks\n");
    output.push_str("2. Follow the day-by-day progression\n");
    output.push_str("3. Complete the daily reflections\n");
    output.push_str("4. Reach out to mentors as needed\n\n");

    output.push_str("### Repository Structure\n\n");
    output.push_str("- `/setup`: Environment setup scripts and guides\n");
    output.push_str("- `/resources`: Reference materials and documentation\n");
    output.push_str("- `/weekly_tasks`: Daily task breakdowns organized by week\n");

    output
}

pub fn setup_readme() -> String {
    r#"# Environment Setup

This directory contains scripts and guides to set up your development environment for the Detect_Drift project.

## Requirements

- Computer with at least 8GB RAM, 4 CPU cores
- 20GB free disk space
- Git installed
- Docker installed
- Python 3.8+ installed

## Setup Script

Run the following command to set up your environment:

```bash
./setup.sh
```
"#
    .to_string()
}

pub fn setup_script() -> String {
    r#"#!/bin/bash

# Detect_Drift Project Setup Script

# Install required packages
pip install kubernetes pyyaml requests rich

# Install kubectl
curl -LO "https://dl.k8s.io/release/$(curl -L -s https://dl.k8s.io/release/stable.txt)/bin/linux/amd64/kubectl"
chmod +x kubectl
sudo mv kubectl /usr/local/bin/

# Install minikube
curl -LO https://storage.googleapis.com/minikube/releases/latest/minikube-linux-amd64
chmod +x minikube-linux-amd64
sudo mv minikube-linux-amd64 /usr/local/bin/minikube

# Start minikube
minikube start

echo "Setup completed successfully!"
"#
    .to_string()
}

pub fn resources_readme() -> String {
    r#"# Project Resources

This directory contains reference materials, sample configurations, and documentation for the Detect_Drift project.

## Contents

- `sample_configs/`: Example Kubernetes manifests for testing
- `cheat_sheets/`: Quick reference guides for tools and concepts
- `case_studies/`: Real-world examples of configuration drift
"#
    .to_string()
}
